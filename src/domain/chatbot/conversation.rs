//! Chat widget conversation state.

use serde::{Deserialize, Serialize};

use super::{CannedResponse, KnowledgeBase};
use crate::domain::foundation::{MessageId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<String>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Timestamp::now(),
            quick_replies: Vec::new(),
        }
    }

    pub fn from_bot(answer: &CannedResponse) -> Self {
        Self {
            id: MessageId::new(),
            text: answer.response.clone(),
            sender: Sender::Bot,
            timestamp: Timestamp::now(),
            quick_replies: answer.quick_replies.clone(),
        }
    }
}

/// What the bot will do about a message the user just sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedReply {
    /// Run the human hand-off script.
    Handoff,
    /// Post a canned answer. `fast` is set once a human agent is connected.
    Answer { answer: CannedResponse, fast: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    is_open: bool,
    messages: Vec<ChatMessage>,
    is_typing: bool,
    connected_to_human: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn is_connected_to_human(&self) -> bool {
        self.connected_to_human
    }

    /// Opens the widget. Returns true when the log is empty and the welcome
    /// message should be scheduled.
    pub fn open(&mut self) -> bool {
        self.is_open = true;
        self.messages.is_empty()
    }

    /// Closes the widget. Pending replies are dropped by the caller, so the
    /// typing indicator goes with them.
    pub fn close(&mut self) {
        self.is_open = false;
        self.is_typing = false;
    }

    /// Posts the welcome message unless the conversation already started.
    pub fn post_welcome(&mut self, kb: &KnowledgeBase) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::from_bot(&kb.welcome));
        true
    }

    /// Records a user message and decides the bot's reply. Blank input is
    /// ignored.
    pub fn submit(&mut self, text: &str, kb: &KnowledgeBase) -> Option<PlannedReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::from_user(text));
        self.is_typing = true;

        if kb.handoff.is_triggered_by(text) {
            return Some(PlannedReply::Handoff);
        }
        Some(PlannedReply::Answer {
            answer: kb.find_best_match(text).clone(),
            fast: self.connected_to_human,
        })
    }

    /// Posts a bot message and stops the typing indicator.
    pub fn post_bot(&mut self, answer: &CannedResponse) {
        self.messages.push(ChatMessage::from_bot(answer));
        self.is_typing = false;
    }

    /// Final step of the hand-off script.
    pub fn connect_agent(&mut self, greeting: &CannedResponse) {
        self.messages.push(ChatMessage::from_bot(greeting));
        self.connected_to_human = true;
    }
}
