//! Cart aggregate.

use serde::{Deserialize, Serialize};

use super::{CartLine, PriceSummary};
use crate::domain::menu::MenuItem;

/// What a cart mutation did, so the caller can surface the matching toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    Added { name: String },
    QuantityIncreased { name: String },
    QuantitySet { name: String, quantity: u32 },
    Removed { name: String },
    Unchanged,
}

impl CartChange {
    /// Toast text for this change, if the storefront shows one.
    pub fn message(&self) -> Option<String> {
        match self {
            CartChange::Added { name } => Some(format!("Added {} to cart!", name)),
            CartChange::QuantityIncreased { name } => {
                Some(format!("Updated {} quantity in cart!", name))
            }
            CartChange::Removed { name } => Some(format!("Removed {} from cart!", name)),
            CartChange::QuantitySet { .. } | CartChange::Unchanged => None,
        }
    }
}

/// Ordered cart lines, at most one per menu item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities (the header badge). Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id() == item_id)
    }

    /// Adds one of `item`, bumping the quantity if it is already in the cart.
    pub fn add_item(&mut self, item: &MenuItem) -> CartChange {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return CartChange::QuantityIncreased {
                name: line.item.name.clone(),
            };
        }
        self.lines.push(CartLine::new(item.clone()));
        CartChange::Added {
            name: item.name.clone(),
        }
    }

    /// Sets the quantity of an existing line. Zero removes the line; unknown
    /// ids are ignored.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> CartChange {
        if quantity == 0 {
            return self.remove_item(item_id);
        }
        match self.lines.iter_mut().find(|l| l.item_id() == item_id) {
            Some(line) => {
                line.quantity = quantity;
                CartChange::QuantitySet {
                    name: line.item.name.clone(),
                    quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Removes a line if present.
    pub fn remove_item(&mut self, item_id: &str) -> CartChange {
        match self.lines.iter().position(|l| l.item_id() == item_id) {
            Some(index) => {
                let line = self.lines.remove(index);
                CartChange::Removed {
                    name: line.item.name,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn price_summary(&self) -> PriceSummary {
        PriceSummary::calculate(&self.lines)
    }
}
