//! Session-specific error types.

use crate::domain::foundation::{ErrorCode, SessionId};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found, or has already ended.
    NotFound(SessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_session_not_found_code() {
        let id = SessionId::new();
        let err = SessionError::not_found(id);
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert_eq!(err.to_string(), format!("Session not found: {}", id));
    }

    #[test]
    fn infrastructure_maps_to_internal_error() {
        let err = SessionError::infrastructure("store unavailable");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.to_string(), "Error: store unavailable");
    }
}
