//! HTTP routes for the store locator.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    call_link, directions_link, get_locator, get_store, hover_pin, list_cities, list_stores,
    open_directions, place_call, select_city, toggle_pin,
};
use crate::adapters::http::AppState;

pub fn store_routes() -> Router<AppState> {
    Router::new()
        // Directory
        .route("/stores", get(list_stores))
        .route("/stores/cities", get(list_cities))
        .route("/stores/:id", get(get_store))
        .route("/stores/:id/directions", get(directions_link))
        .route("/stores/:id/call", get(call_link))
        // Visitor locator
        .route("/sessions/:id/locator", get(get_locator))
        .route("/sessions/:id/locator/city", put(select_city))
        .route("/sessions/:id/locator/pins/:store_id", post(toggle_pin))
        .route("/sessions/:id/locator/hover", post(hover_pin))
        .route(
            "/sessions/:id/stores/:store_id/directions",
            post(open_directions),
        )
        .route("/sessions/:id/stores/:store_id/call", post(place_call))
}
