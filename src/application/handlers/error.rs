//! Errors returned by application handlers.

use thiserror::Error;

use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::ErrorCode;
use crate::domain::menu::CatalogError;
use crate::domain::session::SessionError;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("Offer not found: {0}")]
    OfferNotFound(String),

    #[error("Unknown action: {0}")]
    ActionNotFound(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl HandlerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        HandlerError::InvalidInput(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            HandlerError::Session(err) => err.code(),
            HandlerError::Checkout(err) => err.code(),
            HandlerError::Catalog(CatalogError::ItemNotFound(_)) => ErrorCode::MenuItemNotFound,
            HandlerError::Catalog(_) => ErrorCode::InternalError,
            HandlerError::StoreNotFound(_) => ErrorCode::StoreNotFound,
            HandlerError::OfferNotFound(_) => ErrorCode::OfferNotFound,
            HandlerError::ActionNotFound(_) => ErrorCode::DocumentNotFound,
            HandlerError::InvalidInput(_) => ErrorCode::ValidationFailed,
        }
    }
}
