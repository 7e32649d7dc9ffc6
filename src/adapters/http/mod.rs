//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own folder with DTOs, handlers and routes. Everything
//! is mounted under `/api` by [`api_router`].

pub mod carousel;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod content;
pub mod error;
pub mod membership;
pub mod menu;
pub mod session;
pub mod state;
pub mod stores;
pub mod tracking;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the complete API router, mounted at `/api`.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(session::session_routes())
        .merge(menu::menu_routes())
        .merge(cart::cart_routes())
        .merge(checkout::checkout_routes())
        .merge(tracking::tracking_routes())
        .merge(chat::chat_routes())
        .merge(stores::store_routes())
        .merge(membership::membership_routes())
        .merge(content::content_routes())
        .merge(carousel::carousel_routes());

    Router::new().nest("/api", api).with_state(state)
}
