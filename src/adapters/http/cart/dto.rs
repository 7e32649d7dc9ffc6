//! HTTP DTOs for cart endpoints.
//!
//! Money amounts in `summary` keep full precision; `bill` carries the
//! rounded display strings.

use serde::{Deserialize, Serialize};

use crate::adapters::http::menu::MenuItemResponse;
use crate::application::handlers::CartSnapshot;
use crate::domain::cart::{BillLine, CartLine, PriceSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub item_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetQuantityRequest {
    /// Zero removes the line.
    pub quantity: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CartLineResponse {
    pub item: MenuItemResponse,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            item: MenuItemResponse::from(&line.item),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub item_count: u32,
    pub is_empty: bool,
    pub is_open: bool,
    pub summary: PriceSummary,
    pub taxes_and_charges: String,
    pub has_free_delivery: bool,
    pub bill: Vec<BillLine>,
    pub total_display: String,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        let summary = snapshot.cart.price_summary();
        Self {
            lines: snapshot
                .cart
                .lines()
                .iter()
                .map(CartLineResponse::from)
                .collect(),
            item_count: snapshot.cart.item_count(),
            is_empty: snapshot.cart.is_empty(),
            is_open: snapshot.is_open,
            summary,
            taxes_and_charges: summary.taxes_and_charges().to_string(),
            has_free_delivery: summary.has_free_delivery(),
            bill: summary.bill_lines(),
            total_display: summary.total.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::foundation::Money;
    use crate::domain::menu::{MenuCategory, MenuItem};

    #[test]
    fn cart_response_matches_the_worked_example() {
        let item = MenuItem::new("1", "Original Crispy", Money::from_cents(899), MenuCategory::Chicken);
        let mut cart = Cart::new();
        cart.add_item(&item);
        cart.add_item(&item);

        let response = CartResponse::from(CartSnapshot {
            cart,
            is_open: true,
        });

        assert_eq!(response.item_count, 2);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].line_total, "$17.98");
        assert_eq!(response.total_display, "$26.61");
        assert!(!response.has_free_delivery);
        assert_eq!(response.bill.last().map(|l| l.label), Some("Total Amount"));
    }

    #[test]
    fn quantity_request_deserializes() {
        let req: SetQuantityRequest = serde_json::from_str(r#"{"quantity": 0}"#).unwrap();
        assert_eq!(req.quantity, 0);
    }
}
