//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the storefront domain.

mod errors;
mod ids;
mod money;
mod operation;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use money::Money;
pub use operation::OperationStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
