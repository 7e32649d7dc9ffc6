//! SiteSession aggregate.
//!
//! Everything one visitor sees: cart, checkout, tracker, chat widget,
//! membership wizard and the small bits of view state the page keeps.
//! Sessions never share state with each other.

use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;
use crate::domain::chatbot::Conversation;
use crate::domain::checkout::Checkout;
use crate::domain::content::{featured_dishes, testimonials, Carousel};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::membership::MembershipSignup;
use crate::domain::menu::MenuCategory;
use crate::domain::stores::{CityFilter, MapView};
use crate::domain::tracking::OrderTracker;

/// The two autoplaying carousels on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselKind {
    Featured,
    Testimonials,
}

impl std::str::FromStr for CarouselKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(CarouselKind::Featured),
            "testimonials" => Ok(CarouselKind::Testimonials),
            _ => Err(format!("Invalid carousel: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSession {
    pub id: SessionId,
    pub cart: Cart,
    pub cart_open: bool,
    pub checkout: Checkout,
    pub tracker: OrderTracker,
    pub chat: Conversation,
    pub membership: MembershipSignup,
    pub active_category: MenuCategory,
    pub copied_code: Option<String>,
    pub selected_city: CityFilter,
    pub map: MapView,
    pub featured: Carousel,
    pub testimonials: Carousel,
    pub created_at: Timestamp,
    pub last_seen: Timestamp,
}

impl SiteSession {
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            cart: Cart::new(),
            cart_open: false,
            checkout: Checkout::new(),
            tracker: OrderTracker::new(),
            chat: Conversation::new(),
            membership: MembershipSignup::new(),
            active_category: MenuCategory::default(),
            copied_code: None,
            selected_city: CityFilter::All,
            map: MapView::default(),
            featured: Carousel::new(featured_dishes().len()),
            testimonials: Carousel::new(testimonials().len()),
            created_at: now,
            last_seen: now,
        }
    }

    /// Records visitor activity.
    pub fn touch(&mut self) {
        self.last_seen = Timestamp::now();
    }

    pub fn is_idle_since(&self, cutoff: &Timestamp) -> bool {
        self.last_seen.is_before(cutoff)
    }

    pub fn carousel(&self, kind: CarouselKind) -> &Carousel {
        match kind {
            CarouselKind::Featured => &self.featured,
            CarouselKind::Testimonials => &self.testimonials,
        }
    }

    pub fn carousel_mut(&mut self, kind: CarouselKind) -> &mut Carousel {
        match kind {
            CarouselKind::Featured => &mut self.featured,
            CarouselKind::Testimonials => &mut self.testimonials,
        }
    }

    /// Shows the tracker for the current cart and hides the cart panel.
    pub fn start_tracking(&mut self) {
        self.cart_open = false;
        self.tracker.open(self.cart.item_count());
    }

    /// Closing the tracker ends the order: it rewinds and the cart empties.
    pub fn finish_tracking(&mut self) {
        self.tracker.close();
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::MenuCatalog;

    #[test]
    fn new_session_defaults() {
        let session = SiteSession::new(SessionId::new());
        assert!(session.cart.is_empty());
        assert!(!session.cart_open);
        assert_eq!(session.active_category, MenuCategory::Chicken);
        assert_eq!(session.selected_city, CityFilter::All);
        assert_eq!(session.featured.len(), 3);
        assert_eq!(session.testimonials.len(), 6);
        assert!(!session.tracker.is_visible());
    }

    #[test]
    fn start_tracking_captures_item_count_and_closes_cart() {
        let mut session = SiteSession::new(SessionId::new());
        let item = MenuCatalog::standard().find("c6").unwrap();
        session.cart.add_item(item);
        session.cart.add_item(item);
        session.cart_open = true;

        session.start_tracking();
        assert!(!session.cart_open);
        assert!(session.tracker.is_visible());
        assert_eq!(session.tracker.item_count(), 2);
    }

    #[test]
    fn finish_tracking_clears_cart() {
        let mut session = SiteSession::new(SessionId::new());
        session.cart.add_item(MenuCatalog::standard().find("1").unwrap());
        session.start_tracking();

        session.finish_tracking();
        assert!(session.cart.is_empty());
        assert!(!session.tracker.is_visible());
    }

    #[test]
    fn idle_check_compares_last_seen() {
        let session = SiteSession::new(SessionId::new());
        assert!(session.is_idle_since(&session.last_seen.plus_seconds(1)));
        assert!(!session.is_idle_since(&session.last_seen.plus_seconds(-1)));
    }
}
