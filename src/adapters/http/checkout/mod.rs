//! HTTP adapter for checkout endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckoutResponse, PendingOrderResponse, SelectPaymentMethodRequest, SelectTabRequest,
    SelectWalletRequest, VerifyUpiRequest, WalletOption,
};
pub use routes::checkout_routes;
