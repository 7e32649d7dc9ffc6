//! HTTP handlers for the order tracker.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::TrackerResponse;
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::AppState;

/// GET /api/sessions/:id/tracker
pub async fn get_tracker(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<TrackerResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let tracker = state.tracking.view(&session_id).await?;
    Ok(Json((&tracker).into()))
}

/// POST /api/sessions/:id/tracker/close - Dismiss the tracker and clear the cart
pub async fn close_tracker(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<TrackerResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let tracker = state.tracking.close(&session_id).await?;
    Ok(Json((&tracker).into()))
}
