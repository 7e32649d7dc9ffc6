//! HTTP DTOs for the chat widget.

use serde::{Deserialize, Serialize};

use crate::domain::chatbot::{ChatMessage, Conversation, Sender};

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<String>,
}

impl From<&ChatMessage> for ChatMessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            text: message.text.clone(),
            sender: message.sender,
            timestamp: message.timestamp.as_datetime().to_rfc3339(),
            quick_replies: message.quick_replies.clone(),
        }
    }
}

/// The widget state. Bot replies land after a delay, so clients poll this.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub is_open: bool,
    pub is_typing: bool,
    pub connected_to_human: bool,
    pub messages: Vec<ChatMessageResponse>,
}

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        Self {
            is_open: conversation.is_open(),
            is_typing: conversation.is_typing(),
            connected_to_human: conversation.is_connected_to_human(),
            messages: conversation
                .messages()
                .iter()
                .map(ChatMessageResponse::from)
                .collect(),
        }
    }
}
