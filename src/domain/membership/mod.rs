//! Membership domain module.
//!
//! - `tier` - loyalty tiers and program benefits
//! - `signup` - the signup wizard

mod signup;
mod tier;

pub use signup::{
    MembershipSignup, SignupError, SignupForm, SignupFormUpdate, SignupOutcome, SignupStep,
    DOWNLOAD_APP_MESSAGE,
};
pub use tier::{Benefit, MembershipProgram, MembershipTier, TierDetails};
