//! Cart line value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::menu::MenuItem;

/// A menu item and how many of it are in the cart. Quantity is never zero
/// while the line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn item_id(&self) -> &str {
        &self.item.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.item.price * self.quantity
    }
}
