//! HTTP DTOs for session endpoints.

use serde::Serialize;

use crate::application::handlers::StartSessionResult;
use crate::domain::notification::{Toast, ToastKind};

/// Response for a newly started session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    /// ISO 8601.
    pub created_at: String,
}

impl From<StartSessionResult> for SessionCreatedResponse {
    fn from(result: StartSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            created_at: result.created_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastResponse {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: String,
}

impl From<Toast> for ToastResponse {
    fn from(toast: Toast) -> Self {
        Self {
            kind: toast.kind,
            message: toast.message,
            created_at: toast.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Pending toasts, oldest first. Draining empties the queue.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<ToastResponse>,
}

impl From<Vec<Toast>> for NotificationsResponse {
    fn from(toasts: Vec<Toast>) -> Self {
        Self {
            notifications: toasts.into_iter().map(ToastResponse::from).collect(),
        }
    }
}
