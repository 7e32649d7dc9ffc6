//! Contact forms: newsletter, new-location requests, franchise inquiries.
//!
//! Submissions are validated and acknowledged; nothing is stored or sent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NEWSLETTER_SUCCESS: &str = "Successfully subscribed for exclusive offers!";
pub const LOCATION_REQUEST_SUCCESS: &str =
    "Location request submitted! We'll review and get back to you within 5 business days.";
pub const FRANCHISE_INQUIRY_SUCCESS: &str =
    "Franchise inquiry submitted! Our team will contact you within 48 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    /// Accepts any non-blank address containing `@`.
    pub fn validate(&self) -> Result<&'static str, FormError> {
        if filled(&self.email) && self.email.contains('@') {
            Ok(NEWSLETTER_SUCCESS)
        } else {
            Err(FormError::InvalidEmail)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRequest {
    pub name: String,
    pub email: String,
    pub city: String,
    pub details: String,
}

impl LocationRequest {
    pub fn validate(&self) -> Result<&'static str, FormError> {
        if filled(&self.name) && filled(&self.email) && filled(&self.city) {
            Ok(LOCATION_REQUEST_SUCCESS)
        } else {
            Err(FormError::MissingRequiredFields)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FranchiseInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub investment: String,
}

impl FranchiseInquiry {
    pub fn validate(&self) -> Result<&'static str, FormError> {
        if filled(&self.name) && filled(&self.email) && filled(&self.phone) {
            Ok(FRANCHISE_INQUIRY_SUCCESS)
        } else {
            Err(FormError::MissingRequiredFields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newsletter(email: &str) -> NewsletterSignup {
        NewsletterSignup {
            email: email.to_string(),
        }
    }

    #[test]
    fn newsletter_accepts_address_with_at() {
        assert_eq!(newsletter("a@b").validate(), Ok(NEWSLETTER_SUCCESS));
    }

    #[test]
    fn newsletter_rejects_blank_or_missing_at() {
        assert_eq!(newsletter("   ").validate(), Err(FormError::InvalidEmail));
        assert_eq!(newsletter("chicken.lover").validate(), Err(FormError::InvalidEmail));
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn location_request_needs_name_email_city() {
        let mut request = LocationRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate(), Err(FormError::MissingRequiredFields));

        request.city = "Boston".to_string();
        assert_eq!(request.validate(), Ok(LOCATION_REQUEST_SUCCESS));
    }

    #[test]
    fn franchise_inquiry_needs_phone() {
        let inquiry = FranchiseInquiry {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            location: "Boston".to_string(),
            ..Default::default()
        };
        assert_eq!(
            inquiry.validate().unwrap_err().to_string(),
            "Please fill in all required fields"
        );
    }
}
