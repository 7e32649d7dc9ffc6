//! Three-step membership signup wizard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MembershipProgram, MembershipTier};

pub const DOWNLOAD_APP_MESSAGE: &str =
    "Coming soon! Download our mobile app for exclusive features.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupStep {
    #[default]
    ChooseTier,
    Details,
    Payment,
}

impl SignupStep {
    /// 1-based step number shown in the dialog.
    pub fn number(&self) -> u8 {
        match self {
            SignupStep::ChooseTier => 1,
            SignupStep::Details => 2,
            SignupStep::Payment => 3,
        }
    }
}

/// Fields collected by the wizard. Partial updates leave `None` fields alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupFormUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<String>,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl SignupForm {
    pub fn apply(&mut self, update: SignupFormUpdate) {
        let fields = [
            (&mut self.name, update.name),
            (&mut self.email, update.email),
            (&mut self.phone, update.phone),
            (&mut self.birthday, update.birthday),
            (&mut self.card_number, update.card_number),
            (&mut self.expiry_date, update.expiry_date),
            (&mut self.cvv, update.cvv),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }

    pub fn has_contact_details(&self) -> bool {
        filled(&self.name) && filled(&self.email)
    }

    pub fn has_payment_details(&self) -> bool {
        filled(&self.card_number) && filled(&self.expiry_date) && filled(&self.cvv)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please choose a membership tier")]
    NoTierSelected,

    #[error("Please fill in all required fields")]
    MissingDetails,

    #[error("Please fill in all payment details")]
    MissingPayment,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Advanced(SignupStep),
    Completed { tier: MembershipTier, tier_name: String },
}

impl SignupOutcome {
    pub fn welcome_message(&self) -> Option<String> {
        match self {
            SignupOutcome::Completed { tier_name, .. } => Some(format!(
                "🎉 Welcome to CRISPY ELITE {}! Check your email for your digital membership card.",
                tier_name
            )),
            SignupOutcome::Advanced(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSignup {
    is_open: bool,
    step: SignupStep,
    selected_tier: Option<MembershipTier>,
    form: SignupForm,
}

impl MembershipSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn selected_tier(&self) -> Option<MembershipTier> {
        self.selected_tier
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// "Choose {tier}" on a tier card: opens the dialog at the details step.
    pub fn choose_tier(&mut self, tier: MembershipTier) {
        self.selected_tier = Some(tier);
        self.is_open = true;
        self.step = SignupStep::Details;
    }

    /// "Start free trial" preselects the gold tier.
    pub fn start_free_trial(&mut self) {
        self.choose_tier(MembershipTier::Gold);
    }

    pub fn update_form(&mut self, update: SignupFormUpdate) {
        self.form.apply(update);
    }

    /// Validates the current step and moves on.
    pub fn submit(&mut self, program: &MembershipProgram) -> Result<SignupOutcome, SignupError> {
        match self.step {
            SignupStep::ChooseTier => Err(SignupError::NoTierSelected),
            SignupStep::Details => {
                if !self.form.has_contact_details() {
                    return Err(SignupError::MissingDetails);
                }
                self.step = SignupStep::Payment;
                Ok(SignupOutcome::Advanced(SignupStep::Payment))
            }
            SignupStep::Payment => {
                let tier = self
                    .selected_tier
                    .and_then(|id| program.tier(id))
                    .ok_or(SignupError::NoTierSelected)?;
                if !tier.is_free() && !self.form.has_payment_details() {
                    return Err(SignupError::MissingPayment);
                }
                let outcome = SignupOutcome::Completed {
                    tier: tier.id,
                    tier_name: tier.name.clone(),
                };
                *self = Self::default();
                Ok(outcome)
            }
        }
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            SignupStep::Payment => SignupStep::Details,
            SignupStep::Details | SignupStep::ChooseTier => SignupStep::ChooseTier,
        };
    }

    /// Closes the dialog. Typed form fields are kept for the next attempt.
    pub fn cancel(&mut self) {
        self.is_open = false;
        self.step = SignupStep::ChooseTier;
        self.selected_tier = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> &'static MembershipProgram {
        MembershipProgram::standard()
    }

    fn details(name: &str, email: &str) -> SignupFormUpdate {
        SignupFormUpdate {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn choosing_tier_opens_details_step() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Platinum);
        assert!(signup.is_open());
        assert_eq!(signup.step(), SignupStep::Details);
        assert_eq!(signup.selected_tier(), Some(MembershipTier::Platinum));
    }

    #[test]
    fn free_trial_selects_gold() {
        let mut signup = MembershipSignup::new();
        signup.start_free_trial();
        assert_eq!(signup.selected_tier(), Some(MembershipTier::Gold));
        assert_eq!(signup.step().number(), 2);
    }

    #[test]
    fn details_step_requires_name_and_email() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Gold);
        signup.update_form(details("Ada", ""));

        let err = signup.submit(program()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
        assert_eq!(signup.step(), SignupStep::Details);
    }

    #[test]
    fn paid_tier_requires_payment_details() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Gold);
        signup.update_form(details("Ada", "ada@example.com"));
        assert_eq!(
            signup.submit(program()),
            Ok(SignupOutcome::Advanced(SignupStep::Payment))
        );

        let err = signup.submit(program()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all payment details");

        signup.update_form(SignupFormUpdate {
            card_number: Some("4242 4242 4242 4242".to_string()),
            expiry_date: Some("12/27".to_string()),
            cvv: Some("123".to_string()),
            ..Default::default()
        });
        let outcome = signup.submit(program()).unwrap();
        assert_eq!(
            outcome.welcome_message().as_deref(),
            Some("🎉 Welcome to CRISPY ELITE Golden Member! Check your email for your digital membership card.")
        );
        assert_eq!(signup, MembershipSignup::default());
    }

    #[test]
    fn free_tier_skips_payment_details() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Bronze);
        signup.update_form(details("Ada", "ada@example.com"));
        signup.submit(program()).unwrap();

        let outcome = signup.submit(program()).unwrap();
        assert!(matches!(outcome, SignupOutcome::Completed { tier: MembershipTier::Bronze, .. }));
    }

    #[test]
    fn back_from_payment_returns_to_details() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Gold);
        signup.update_form(details("Ada", "ada@example.com"));
        signup.submit(program()).unwrap();
        signup.back();
        assert_eq!(signup.step(), SignupStep::Details);
    }

    #[test]
    fn cancel_closes_and_forgets_tier_but_keeps_form() {
        let mut signup = MembershipSignup::new();
        signup.choose_tier(MembershipTier::Gold);
        signup.update_form(details("Ada", "ada@example.com"));
        signup.cancel();

        assert!(!signup.is_open());
        assert_eq!(signup.step(), SignupStep::ChooseTier);
        assert_eq!(signup.selected_tier(), None);
        assert_eq!(signup.form().name, "Ada");
    }

    #[test]
    fn submit_on_first_step_needs_a_tier() {
        let mut signup = MembershipSignup::new();
        assert_eq!(signup.submit(program()), Err(SignupError::NoTierSelected));
    }
}
