//! HTTP handlers for membership endpoints.
//!
//! Validation failures in the wizard come back as error toasts with a 200,
//! not as HTTP errors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ChooseTierRequest, SignupResponse};
use crate::adapters::http::error::{parse_session_id, parse_value, ApiResult};
use crate::adapters::http::AppState;
use crate::domain::membership::{Benefit, MembershipTier, SignupFormUpdate, TierDetails};

/// GET /api/membership/tiers
pub async fn list_tiers(State(state): State<AppState>) -> Json<Vec<TierDetails>> {
    Json(state.membership.tiers().to_vec())
}

/// GET /api/membership/benefits
pub async fn list_benefits(State(state): State<AppState>) -> Json<Vec<Benefit>> {
    Json(state.membership.benefits().to_vec())
}

/// GET /api/sessions/:id/membership
pub async fn get_signup(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.view(&session_id).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/tier
pub async fn choose_tier(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ChooseTierRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let tier: MembershipTier = parse_value(&req.tier)?;
    let signup = state.membership.choose_tier(&session_id, tier).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/free-trial - Hero "start free trial"
pub async fn start_free_trial(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.start_free_trial(&session_id).await?;
    Ok(Json((&signup).into()))
}

/// PATCH /api/sessions/:id/membership/form - Partial form update
pub async fn update_form(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(update): Json<SignupFormUpdate>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.update_form(&session_id, update).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/submit - Continue or complete
pub async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.submit(&session_id).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/back
pub async fn back(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.back(&session_id).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SignupResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let signup = state.membership.cancel(&session_id).await?;
    Ok(Json((&signup).into()))
}

/// POST /api/sessions/:id/membership/download-app
pub async fn download_app(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    let session_id = parse_session_id(&session_id)?;
    state.membership.download_app(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
