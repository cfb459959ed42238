use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppError;

/// Topic picked in the contact form's category select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    #[default]
    General,
    Delivery,
    Missing,
    Account,
    Technical,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 5] = [
        ContactCategory::General,
        ContactCategory::Delivery,
        ContactCategory::Missing,
        ContactCategory::Account,
        ContactCategory::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Delivery => "delivery",
            ContactCategory::Missing => "missing",
            ContactCategory::Account => "account",
            ContactCategory::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Delivery => "Delivery Issue",
            ContactCategory::Missing => "Missing Item",
            ContactCategory::Account => "Account Help",
            ContactCategory::Technical => "Technical Support",
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }
}

/// Message from the contact page form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub category: ContactCategory,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

impl ContactMessage {
    /// Trimmed copy of the message, validated.
    pub fn normalized(&self) -> Result<ContactMessage, AppError> {
        let msg = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            category: self.category,
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        msg.validate()?;
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    fn message() -> ContactMessage {
        ContactMessage {
            name: " Asha Patel ".into(),
            email: "asha@freshmart.in".into(),
            category: ContactCategory::Delivery,
            subject: "Late delivery".into(),
            message: "ORD002 arrived an hour late.".into(),
        }
    }

    #[test]
    fn normalized_trims_fields() {
        let msg = message().normalized().unwrap();
        assert_eq!(msg.name, "Asha Patel");
        assert_eq!(msg.category, ContactCategory::Delivery);
    }

    #[test]
    fn blank_subject_and_bad_email_are_reported() {
        let mut msg = message();
        msg.subject = "  ".into();
        msg.email = "not-an-email".into();
        let err = msg.normalized().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("subject"));
        assert!(err.field_errors.contains_key("email"));
    }

    #[test]
    fn unknown_category_falls_back_to_general() {
        assert_eq!(ContactCategory::parse_or_default("billing"), ContactCategory::General);
        assert_eq!(ContactCategory::parse_or_default("missing"), ContactCategory::Missing);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&ContactCategory::Technical).unwrap();
        assert_eq!(json, "\"technical\"");
    }
}
