//! HTTP DTOs for membership endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::membership::{MembershipSignup, MembershipTier, SignupForm, SignupStep};

/// Request to pick a tier on step one.
#[derive(Debug, Clone, Deserialize)]
pub struct ChooseTierRequest {
    /// `bronze`, `gold` or `platinum`.
    pub tier: String,
}

/// Wizard state for the signup dialog.
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub is_open: bool,
    pub step: SignupStep,
    /// 1-based, as shown in the dialog header.
    pub step_number: u8,
    pub selected_tier: Option<MembershipTier>,
    pub form: SignupForm,
}

impl From<&MembershipSignup> for SignupResponse {
    fn from(signup: &MembershipSignup) -> Self {
        Self {
            is_open: signup.is_open(),
            step: signup.step(),
            step_number: signup.step().number(),
            selected_tier: signup.selected_tier(),
            form: signup.form().clone(),
        }
    }
}
