//! HTTP handlers for session endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{NotificationsResponse, SessionCreatedResponse};
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::AppState;

/// POST /api/sessions - Start a visitor session
pub async fn start_session(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<SessionCreatedResponse>)> {
    let result = state.sessions.start().await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// DELETE /api/sessions/:id - End a session and cancel its timers
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    let session_id = parse_session_id(&session_id)?;
    state.sessions.end(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/:id/notifications - Drain pending toasts
pub async fn drain_notifications(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<NotificationsResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let toasts = state.sessions.notifications(&session_id).await?;
    Ok(Json(toasts.into()))
}
