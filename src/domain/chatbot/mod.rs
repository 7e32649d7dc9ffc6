//! Support chatbot domain module.
//!
//! - `knowledge_base` - ordered keyword rules and canned answers
//! - `conversation` - the chat log and widget state

mod conversation;
mod knowledge_base;

pub use conversation::{ChatMessage, Conversation, PlannedReply, Sender};
pub use knowledge_base::{CannedResponse, HandoffScript, KnowledgeBase, KnowledgeRule};
