//! HTTP routes for carousels.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_carousel, go_to_slide, hover, leave, next_slide, prev_slide};
use crate::adapters::http::AppState;

pub fn carousel_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/carousels/:carousel", get(get_carousel))
        .route("/sessions/:id/carousels/:carousel/next", post(next_slide))
        .route("/sessions/:id/carousels/:carousel/prev", post(prev_slide))
        .route(
            "/sessions/:id/carousels/:carousel/go/:index",
            post(go_to_slide),
        )
        .route("/sessions/:id/carousels/:carousel/hover", post(hover))
        .route("/sessions/:id/carousels/:carousel/leave", post(leave))
}
