//! HTTP DTOs for carousels.

use serde::Serialize;

use crate::domain::content::Carousel;
use crate::domain::session::CarouselKind;

#[derive(Debug, Clone, Serialize)]
pub struct CarouselResponse {
    pub carousel: CarouselKind,
    pub len: usize,
    pub current: usize,
    pub autoplay: bool,
}

impl CarouselResponse {
    pub fn new(kind: CarouselKind, carousel: &Carousel) -> Self {
        Self {
            carousel: kind,
            len: carousel.len(),
            current: carousel.current(),
            autoplay: carousel.is_autoplaying(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_reports_position_and_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.pause();

        let response = CarouselResponse::new(CarouselKind::Testimonials, &carousel);
        assert_eq!(response.current, 1);
        assert!(!response.autoplay);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["carousel"], "testimonials");
    }
}
