//! Promotional offers.
//!
//! Promo codes are informational: copying one never changes a cart total.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuCategory;

static STANDARD_OFFERS: Lazy<OfferBook> = Lazy::new(|| {
    OfferBook::from_yaml(include_str!("../../../content/offers.yaml"))
        .expect("bundled offers.yaml must be a valid offer list")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub code: String,
    pub category: MenuCategory,
    pub image: String,
    pub valid_until: String,
}

impl Offer {
    pub fn copied_message(&self) -> String {
        format!("Code {} copied to clipboard!", self.code)
    }

    pub fn order_now_message(&self) -> String {
        format!("Showing {} menu for {}!", self.category, self.subtitle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferBook {
    offers: Vec<Offer>,
}

impl OfferBook {
    pub fn standard() -> &'static OfferBook {
        &STANDARD_OFFERS
    }

    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn find(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Case-insensitive lookup by promo code.
    pub fn find_by_code(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.code.eq_ignore_ascii_case(code))
    }
}
