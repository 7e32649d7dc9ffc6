//! HTTP routes for cart endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{add_item, close_cart, get_cart, open_cart, remove_item, set_quantity};
use crate::adapters::http::AppState;

pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/cart", get(get_cart))
        .route("/sessions/:id/cart/items", post(add_item))
        .route(
            "/sessions/:id/cart/items/:item_id",
            put(set_quantity).delete(remove_item),
        )
        .route("/sessions/:id/cart/open", post(open_cart))
        .route("/sessions/:id/cart/close", post(close_cart))
}
