//! Error vocabulary shared by every domain module.

use std::fmt;
use thiserror::Error;

/// A value or state change that the domain refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Stable machine-readable codes, rendered in SCREAMING_SNAKE_CASE.
///
/// The HTTP layer maps each code to a status; clients switch on the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Bad input
    ValidationFailed,
    EmptyField,

    // Missing
    SessionNotFound,
    MenuItemNotFound,
    StoreNotFound,
    OfferNotFound,
    DocumentNotFound,

    // Wrong moment
    InvalidStateTransition,
    EmptyCart,
    CheckoutNotReady,
    OperationPending,

    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::MenuItemNotFound => "MENU_ITEM_NOT_FOUND",
            ErrorCode::StoreNotFound => "STORE_NOT_FOUND",
            ErrorCode::OfferNotFound => "OFFER_NOT_FOUND",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::CheckoutNotReady => "CHECKOUT_NOT_READY",
            ErrorCode::OperationPending => "OPERATION_PENDING",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_names_field_and_reason() {
        let err = ValidationError::invalid_format("price", "must not be negative");
        assert_eq!(err.field(), "price");
        assert_eq!(
            err.to_string(),
            "Field 'price' has invalid format: must not be negative"
        );
    }

    #[test]
    fn error_codes_render_in_screaming_snake_case() {
        assert_eq!(ErrorCode::CheckoutNotReady.to_string(), "CHECKOUT_NOT_READY");
        assert_eq!(ErrorCode::MenuItemNotFound.to_string(), "MENU_ITEM_NOT_FOUND");
        assert_eq!(ErrorCode::InternalError.as_str(), "INTERNAL_ERROR");
    }
}
