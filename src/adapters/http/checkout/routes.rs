//! HTTP routes for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_checkout, place_order, select_payment_method, select_tab, select_wallet, verify_upi,
};
use crate::adapters::http::AppState;

pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/checkout", get(get_checkout))
        .route("/sessions/:id/checkout/tab", post(select_tab))
        .route(
            "/sessions/:id/checkout/payment-method",
            post(select_payment_method),
        )
        .route("/sessions/:id/checkout/wallet", post(select_wallet))
        .route("/sessions/:id/checkout/upi", post(verify_upi))
        .route("/sessions/:id/checkout/place-order", post(place_order))
}
