//! Featured dishes and customer testimonials shown in the two carousels.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

static FEATURED: Lazy<Vec<FeaturedDish>> = Lazy::new(|| {
    #[derive(Deserialize)]
    struct File {
        dishes: Vec<FeaturedDish>,
    }
    serde_yaml::from_str::<File>(include_str!("../../../content/featured.yaml"))
        .map(|f| f.dishes)
        .expect("bundled featured.yaml must list featured dishes")
});

static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    #[derive(Deserialize)]
    struct File {
        testimonials: Vec<Testimonial>,
    }
    serde_yaml::from_str::<File>(include_str!("../../../content/testimonials.yaml"))
        .map(|f| f.testimonials)
        .expect("bundled testimonials.yaml must list testimonials")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedDish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub rating: f32,
    pub cook_time: String,
    #[serde(default)]
    pub is_special: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub comment: String,
    pub avatar: String,
    pub verified: bool,
}

pub fn featured_dishes() -> &'static [FeaturedDish] {
    &FEATURED
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
