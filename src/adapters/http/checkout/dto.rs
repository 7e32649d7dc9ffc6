//! HTTP DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::{Checkout, CheckoutTab, PaymentMethod, PendingOrder, Wallet};
use crate::domain::foundation::OperationStatus;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct SelectTabRequest {
    /// `cart` or `payment`.
    pub tab: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectPaymentMethodRequest {
    /// `card`, `wallet` or `cod`.
    pub method: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectWalletRequest {
    /// `upi`, `paypal`, `apple` or `google`.
    pub wallet: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyUpiRequest {
    #[serde(default)]
    pub upi_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct WalletOption {
    pub id: Wallet,
    pub name: &'static str,
    pub requires_verification: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingOrderResponse {
    pub method: PaymentMethod,
    pub wallet: Option<Wallet>,
    pub total: String,
    pub item_count: u32,
    pub placed_at: String,
}

impl From<&PendingOrder> for PendingOrderResponse {
    fn from(order: &PendingOrder) -> Self {
        Self {
            method: order.method,
            wallet: order.wallet,
            total: order.total.to_string(),
            item_count: order.item_count,
            placed_at: order.placed_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub active_tab: CheckoutTab,
    pub payment_method: PaymentMethod,
    pub selected_wallet: Option<Wallet>,
    pub wallets: Vec<WalletOption>,
    pub upi_id: String,
    pub upi_verification: OperationStatus,
    pub upi_verified: bool,
    pub payment: OperationStatus,
    pub is_processing: bool,
    pub can_place_order: bool,
    /// Why "place order" is disabled, if it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking_reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_order: Option<PendingOrderResponse>,
}

impl From<&Checkout> for CheckoutResponse {
    fn from(checkout: &Checkout) -> Self {
        Self {
            active_tab: checkout.active_tab(),
            payment_method: checkout.payment_method(),
            selected_wallet: checkout.selected_wallet(),
            wallets: Wallet::all()
                .iter()
                .map(|wallet| WalletOption {
                    id: *wallet,
                    name: wallet.display_name(),
                    requires_verification: wallet.requires_verification(),
                })
                .collect(),
            upi_id: checkout.upi_id().to_string(),
            upi_verification: checkout.upi_verification(),
            upi_verified: checkout.is_upi_verified(),
            payment: checkout.payment(),
            is_processing: checkout.is_processing(),
            can_place_order: checkout.can_place_order(),
            blocking_reason: checkout.blocking_reason().map(|reason| reason.describe()),
            pending_order: checkout.pending_order().map(PendingOrderResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_checkout_is_on_the_cart_tab_paying_by_card() {
        let response = CheckoutResponse::from(&Checkout::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["active_tab"], "cart");
        assert_eq!(json["payment_method"], "card");
        assert_eq!(json["upi_verification"], "idle");
        assert!(json.get("pending_order").is_none());
        assert_eq!(response.wallets.len(), 4);
    }

    #[test]
    fn wallet_without_selection_reports_blocking_reason() {
        let mut checkout = Checkout::new();
        checkout.select_payment_method(PaymentMethod::Wallet);
        let response = CheckoutResponse::from(&checkout);
        assert!(!response.can_place_order);
        assert_eq!(response.blocking_reason, Some("select a wallet to pay with"));
    }
}
