//! Lead capture models
//!
//! A lead is a prospective-customer contact submission, optionally tagged
//! with the project it concerns. Write-only from the client's perspective:
//! no endpoint ever reads leads back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored enquiry; `created_at` is assigned by storage, never by clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    /// Weak reference to a project, never validated against the catalog
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Enquiry submission from the lead form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub project_id: Option<i32>,
}

impl NewLead {
    /// Materialize the stored record; storage assigns id and timestamp.
    pub fn into_lead(self, id: i32, created_at: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            project_id: self.project_id,
            created_at,
        }
    }
}

/// Response body for an accepted lead submission
#[derive(Debug, Serialize)]
pub struct LeadAccepted {
    pub success: bool,
}

/// Validate a phone number: digits with optional +, spaces, dashes, parens
fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    let re = regex::Regex::new(r"^\+?[0-9][0-9\s\-()]{2,19}$").unwrap();

    if !re.is_match(phone) {
        let mut err = validator::ValidationError::new("invalid_phone");
        err.message = Some("A valid phone number is required".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_input(name: &str, email: &str, phone: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: None,
            project_id: None,
        }
    }

    #[test]
    fn test_valid_lead_passes() {
        let input = lead_input("A", "a@example.com", "555");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let input = lead_input("", "a@example.com", "555-0100");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let input = lead_input("A", "not-an-email", "555-0100");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let input = lead_input("A", "a@example.com", "call me");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_international_phone_accepted() {
        let input = lead_input("A", "a@example.com", "+91 98765 43210");
        assert!(input.validate().is_ok());
    }
}
