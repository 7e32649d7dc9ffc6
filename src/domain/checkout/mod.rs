//! Checkout domain module.
//!
//! - `payment` - tab, payment method and wallet enums
//! - `checkout` - Checkout view state and order gating
//! - `order` - PendingOrder and its confirmation text
//! - `errors` - CheckoutError

mod checkout;
mod errors;
mod order;
mod payment;

pub use checkout::Checkout;
pub use errors::{CheckoutError, NotReadyReason};
pub use order::PendingOrder;
pub use payment::{CheckoutTab, PaymentMethod, Wallet};
