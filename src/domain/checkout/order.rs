//! An order whose simulated payment is in flight.

use serde::{Deserialize, Serialize};

use super::{PaymentMethod, Wallet};
use crate::domain::foundation::{Money, Timestamp};

/// Snapshot taken when the customer presses "place order".
///
/// The total is frozen here so the confirmation quotes what the customer
/// agreed to, even if the cart changes while the payment is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub method: PaymentMethod,
    pub wallet: Option<Wallet>,
    pub total: Money,
    pub item_count: u32,
    pub placed_at: Timestamp,
}

impl PendingOrder {
    pub fn new(method: PaymentMethod, wallet: Option<Wallet>, total: Money, item_count: u32) -> Self {
        Self {
            method,
            wallet,
            total,
            item_count,
            placed_at: Timestamp::now(),
        }
    }

    /// Success toast shown once the payment delay elapses.
    pub fn confirmation_message(&self) -> String {
        match (self.method, self.wallet) {
            (PaymentMethod::Cod, _) => format!(
                "Order placed! Total: {} - Pay with cash on delivery",
                self.total
            ),
            (PaymentMethod::Wallet, Some(wallet)) => format!(
                "Payment successful via {}! Total: {}",
                wallet.code(),
                self.total
            ),
            (PaymentMethod::Wallet, None) | (PaymentMethod::Card, _) => {
                format!("Payment processed successfully! Total: {}", self.total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total() -> Money {
        "26.6054".parse().unwrap()
    }

    #[test]
    fn cod_message() {
        let order = PendingOrder::new(PaymentMethod::Cod, None, total(), 2);
        assert_eq!(
            order.confirmation_message(),
            "Order placed! Total: $26.61 - Pay with cash on delivery"
        );
    }

    #[test]
    fn wallet_message_uses_wallet_code() {
        let order = PendingOrder::new(PaymentMethod::Wallet, Some(Wallet::Paypal), total(), 2);
        assert_eq!(
            order.confirmation_message(),
            "Payment successful via paypal! Total: $26.61"
        );
    }

    #[test]
    fn card_message() {
        let order = PendingOrder::new(PaymentMethod::Card, None, total(), 2);
        assert_eq!(
            order.confirmation_message(),
            "Payment processed successfully! Total: $26.61"
        );
    }
}
