//! Generic wrap-around carousel.

use serde::{Deserialize, Serialize};

/// Index over `len` slides with an autoplay flag. An empty carousel never
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    pub fn pause(&mut self) {
        self.autoplay = false;
    }

    pub fn resume(&mut self) {
        self.autoplay = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(6);
        assert!(carousel.go_to(4));
        assert!(!carousel.go_to(6));
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert!(!carousel.go_to(0));
    }

    #[test]
    fn pause_and_resume_toggle_autoplay() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.is_autoplaying());
        carousel.pause();
        assert!(!carousel.is_autoplaying());
        carousel.resume();
        assert!(carousel.is_autoplaying());
    }
}
