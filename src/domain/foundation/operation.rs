//! Status of a simulated asynchronous step.
//!
//! UPI verification and payment processing are not real operations: they go
//! pending, wait a fixed delay, and always succeed.

use serde::{Deserialize, Serialize};

use super::{StateMachine, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Done,
}

impl OperationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, OperationStatus::Pending)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, OperationStatus::Done)
    }

    /// Idle -> Pending.
    pub fn begin(&self) -> Result<Self, ValidationError> {
        self.transition_to(OperationStatus::Pending)
    }

    /// Pending -> Done.
    pub fn complete(&self) -> Result<Self, ValidationError> {
        self.transition_to(OperationStatus::Done)
    }

    /// Any state back to Idle. Never fails.
    pub fn reset(&self) -> Self {
        OperationStatus::Idle
    }
}

impl StateMachine for OperationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OperationStatus::*;
        matches!(
            (self, target),
            (Idle, Pending) | (Pending, Done) | (Pending, Idle) | (Done, Idle) | (Done, Pending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OperationStatus::*;
        match self {
            Idle => vec![Pending],
            Pending => vec![Done, Idle],
            Done => vec![Idle, Pending],
        }
    }
}
