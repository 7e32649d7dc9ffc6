//! Menu item value object.

use serde::{Deserialize, Serialize};

use super::MenuCategory;
use crate::domain::foundation::Money;

/// One dish on the menu. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_spicy: bool,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: MenuCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category,
            is_popular: false,
            is_spicy: false,
        }
    }
}
