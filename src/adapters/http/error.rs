//! Error responses shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::{ErrorCode, SessionId};

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches the domain error code, e.g. `SESSION_NOT_FOUND`.
    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.details = Some(serde_json::json!({ "error_code": code.to_string() }));
        self
    }
}

/// Error returned from HTTP handlers. Renders as a JSON `ErrorResponse`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::bad_request(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<HandlerError> for ApiError {
    fn from(error: HandlerError) -> Self {
        let code = error.code();
        let message = error.to_string();
        let (status, body) = match code {
            ErrorCode::SessionNotFound
            | ErrorCode::MenuItemNotFound
            | ErrorCode::StoreNotFound
            | ErrorCode::OfferNotFound
            | ErrorCode::DocumentNotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(message))
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            ErrorCode::InvalidStateTransition
            | ErrorCode::EmptyCart
            | ErrorCode::CheckoutNotReady
            | ErrorCode::OperationPending => {
                (StatusCode::CONFLICT, ErrorResponse::conflict(message))
            }
            ErrorCode::InternalError => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(message),
                )
            }
        };
        Self {
            status,
            body: body.with_error_code(code),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Parses the `:id` path segment.
pub fn parse_session_id(raw: &str) -> ApiResult<SessionId> {
    raw.parse::<SessionId>()
        .map_err(|_| ApiError::bad_request(format!("Invalid session ID: {}", raw)))
}

/// Parses an enum-valued path segment or body field.
pub fn parse_value<T>(raw: &str) -> ApiResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>().map_err(ApiError::bad_request)
}
