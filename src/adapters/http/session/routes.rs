//! HTTP routes for session endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{drain_notifications, end_session, start_session};
use crate::adapters::http::AppState;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(start_session))
        .route("/sessions/:id", delete(end_session))
        .route("/sessions/:id/notifications", get(drain_notifications))
}
