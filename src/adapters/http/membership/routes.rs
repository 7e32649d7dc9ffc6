//! HTTP routes for membership endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    back, cancel, choose_tier, download_app, get_signup, list_benefits, list_tiers,
    start_free_trial, submit, update_form,
};
use crate::adapters::http::AppState;

/// # Routes
///
/// ## Programme
/// - `GET /membership/tiers`
/// - `GET /membership/benefits`
///
/// ## Signup wizard
/// - `GET /sessions/:id/membership`
/// - `POST /sessions/:id/membership/tier`
/// - `POST /sessions/:id/membership/free-trial`
/// - `PATCH /sessions/:id/membership/form`
/// - `POST /sessions/:id/membership/submit`
/// - `POST /sessions/:id/membership/back`
/// - `POST /sessions/:id/membership/cancel`
/// - `POST /sessions/:id/membership/download-app`
pub fn membership_routes() -> Router<AppState> {
    Router::new()
        .route("/membership/tiers", get(list_tiers))
        .route("/membership/benefits", get(list_benefits))
        .route("/sessions/:id/membership", get(get_signup))
        .route("/sessions/:id/membership/tier", post(choose_tier))
        .route("/sessions/:id/membership/free-trial", post(start_free_trial))
        .route("/sessions/:id/membership/form", patch(update_form))
        .route("/sessions/:id/membership/submit", post(submit))
        .route("/sessions/:id/membership/back", post(back))
        .route("/sessions/:id/membership/cancel", post(cancel))
        .route("/sessions/:id/membership/download-app", post(download_app))
}
