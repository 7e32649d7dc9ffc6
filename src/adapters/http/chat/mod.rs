//! HTTP adapter for the chat widget.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageResponse, ConversationResponse, SendMessageRequest};
pub use routes::chat_routes;
