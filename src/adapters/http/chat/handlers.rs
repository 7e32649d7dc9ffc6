//! HTTP handlers for the chat widget.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{ConversationResponse, SendMessageRequest};
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::AppState;

/// GET /api/sessions/:id/chat
pub async fn get_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ConversationResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let conversation = state.chat.view(&session_id).await?;
    Ok(Json((&conversation).into()))
}

/// POST /api/sessions/:id/chat/open - Open the widget; greets on first open
pub async fn open_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ConversationResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let conversation = state.chat.open(&session_id).await?;
    Ok(Json((&conversation).into()))
}

/// POST /api/sessions/:id/chat/close - Close the widget and drop pending replies
pub async fn close_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ConversationResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let conversation = state.chat.close(&session_id).await?;
    Ok(Json((&conversation).into()))
}

/// POST /api/sessions/:id/chat/messages - Send a message to the bot
pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Json<ConversationResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let conversation = state.chat.send(&session_id, &req.text).await?;
    Ok(Json((&conversation).into()))
}
