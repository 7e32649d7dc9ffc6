//! Checkout-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Why the checkout refused to place an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    PaymentInProgress,
    VerificationInProgress,
    WalletNotSelected,
    UpiNotVerified,
}

impl NotReadyReason {
    pub fn describe(&self) -> &'static str {
        match self {
            NotReadyReason::PaymentInProgress => "a payment is already being processed",
            NotReadyReason::VerificationInProgress => "UPI verification is still in progress",
            NotReadyReason::WalletNotSelected => "select a wallet to pay with",
            NotReadyReason::UpiNotVerified => "verify your UPI ID first",
        }
    }
}

/// Checkout-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines, so there is nothing to check out.
    EmptyCart,
    /// The current selections do not allow placing an order.
    NotReady(NotReadyReason),
    /// UPI verification was requested without an id.
    UpiIdRequired,
    /// Another simulated step is still pending.
    OperationPending,
    /// A simulated step completed out of order.
    InvalidTransition(ValidationError),
}

impl CheckoutError {
    pub fn not_ready(reason: NotReadyReason) -> Self {
        CheckoutError::NotReady(reason)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            CheckoutError::NotReady(_) => ErrorCode::CheckoutNotReady,
            CheckoutError::UpiIdRequired => ErrorCode::EmptyField,
            CheckoutError::OperationPending => ErrorCode::OperationPending,
            CheckoutError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CheckoutError::EmptyCart => "Your cart is empty".to_string(),
            CheckoutError::NotReady(reason) => {
                format!("Cannot place order: {}", reason.describe())
            }
            CheckoutError::UpiIdRequired => "Please enter a valid UPI ID".to_string(),
            CheckoutError::OperationPending => {
                "Please wait for the current step to finish".to_string()
            }
            CheckoutError::InvalidTransition(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CheckoutError {}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::InvalidTransition(err)
    }
}
