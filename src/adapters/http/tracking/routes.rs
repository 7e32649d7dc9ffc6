//! HTTP routes for the order tracker.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{close_tracker, get_tracker};
use crate::adapters::http::AppState;

pub fn tracking_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/tracker", get(get_tracker))
        .route("/sessions/:id/tracker/close", post(close_tracker))
}
