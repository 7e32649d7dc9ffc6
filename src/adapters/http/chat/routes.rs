//! HTTP routes for the chat widget.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{close_chat, get_chat, open_chat, send_message};
use crate::adapters::http::AppState;

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/chat", get(get_chat))
        .route("/sessions/:id/chat/open", post(open_chat))
        .route("/sessions/:id/chat/close", post(close_chat))
        .route("/sessions/:id/chat/messages", post(send_message))
}
