//! Toast notifications.
//!
//! Operations never return user-facing prose directly; they emit toasts that
//! the client drains and renders.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Timestamp,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Toast::success("ok").kind, ToastKind::Success);
        assert_eq!(Toast::error("no").kind, ToastKind::Error);
        assert_eq!(Toast::info("fyi").kind, ToastKind::Info);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_value(Toast::error("Please enter a valid UPI ID")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Please enter a valid UPI ID");
    }
}
