//! HTTP handlers for carousels.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::CarouselResponse;
use crate::adapters::http::error::{parse_session_id, parse_value, ApiError, ApiResult};
use crate::adapters::http::AppState;
use crate::domain::foundation::SessionId;
use crate::domain::session::CarouselKind;

fn parse_target(session_id: &str, carousel: &str) -> ApiResult<(SessionId, CarouselKind)> {
    Ok((parse_session_id(session_id)?, parse_value(carousel)?))
}

/// GET /api/sessions/:id/carousels/:carousel
pub async fn get_carousel(
    State(state): State<AppState>,
    Path((session_id, carousel)): Path<(String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let carousel = state.carousels.view(&session_id, kind).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}

/// POST /api/sessions/:id/carousels/:carousel/next
pub async fn next_slide(
    State(state): State<AppState>,
    Path((session_id, carousel)): Path<(String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let carousel = state.carousels.next(&session_id, kind).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}

/// POST /api/sessions/:id/carousels/:carousel/prev
pub async fn prev_slide(
    State(state): State<AppState>,
    Path((session_id, carousel)): Path<(String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let carousel = state.carousels.prev(&session_id, kind).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}

/// POST /api/sessions/:id/carousels/:carousel/go/:index - Dot navigation
pub async fn go_to_slide(
    State(state): State<AppState>,
    Path((session_id, carousel, index)): Path<(String, String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let index: usize = index
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid slide index: {}", index)))?;
    let carousel = state.carousels.go_to(&session_id, kind, index).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}

/// POST /api/sessions/:id/carousels/:carousel/hover - Pause autoplay
pub async fn hover(
    State(state): State<AppState>,
    Path((session_id, carousel)): Path<(String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let carousel = state.carousels.hover(&session_id, kind).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}

/// POST /api/sessions/:id/carousels/:carousel/leave - Resume autoplay
pub async fn leave(
    State(state): State<AppState>,
    Path((session_id, carousel)): Path<(String, String)>,
) -> ApiResult<Json<CarouselResponse>> {
    let (session_id, kind) = parse_target(&session_id, &carousel)?;
    let carousel = state.carousels.leave(&session_id, kind).await?;
    Ok(Json(CarouselResponse::new(kind, &carousel)))
}
