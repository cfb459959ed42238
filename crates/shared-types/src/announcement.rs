use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppError;

/// Text sent when the admin presses "Send Announcement" without composing one.
pub const DEFAULT_ANNOUNCEMENT: &str =
    "Scheduled maintenance tonight from 11 PM to 1 AM IST. Deliveries are not affected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    All,
    Vendors,
    Suppliers,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::All, Audience::Vendors, Audience::Suppliers];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Vendors => "vendors",
            Audience::Suppliers => "suppliers",
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::All => "all users",
            Audience::Vendors => "vendors",
            Audience::Suppliers => "suppliers",
        }
    }
}

/// Admin broadcast to platform users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnnouncementRequest {
    #[serde(default)]
    pub audience: Audience,
    #[validate(length(min = 1, max = 500, message = "Announcement must be 1-500 characters"))]
    pub message: String,
}

impl Default for AnnouncementRequest {
    fn default() -> Self {
        Self {
            audience: Audience::All,
            message: DEFAULT_ANNOUNCEMENT.to_string(),
        }
    }
}

impl AnnouncementRequest {
    /// Trimmed copy of the request, validated.
    pub fn normalized(&self) -> Result<AnnouncementRequest, AppError> {
        let req = AnnouncementRequest {
            audience: self.audience,
            message: self.message.trim().to_string(),
        };
        req.validate()?;
        Ok(req)
    }
}

/// Acknowledgement returned once a message has been accepted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub reference: String,
    pub accepted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_valid() {
        let req = AnnouncementRequest::default().normalized().unwrap();
        assert_eq!(req.audience, Audience::All);
        assert_eq!(req.message, DEFAULT_ANNOUNCEMENT);
    }

    #[test]
    fn blank_message_is_rejected() {
        let req = AnnouncementRequest {
            audience: Audience::Vendors,
            message: "   ".into(),
        };
        let err = req.normalized().unwrap_err();
        assert!(err.field_errors.contains_key("message"));
    }

    #[test]
    fn message_is_limited_to_500_characters() {
        let at_limit = AnnouncementRequest {
            audience: Audience::All,
            message: "a".repeat(500),
        };
        assert!(at_limit.normalized().is_ok());

        let over = AnnouncementRequest {
            audience: Audience::All,
            message: "a".repeat(501),
        };
        let err = over.normalized().unwrap_err();
        assert!(err.field_errors.contains_key("message"));
    }

    #[test]
    fn limit_applies_after_trimming() {
        let padded = AnnouncementRequest {
            audience: Audience::Vendors,
            message: format!("  {}\n", "a".repeat(500)),
        };
        let req = padded.normalized().unwrap();
        assert_eq!(req.message.len(), 500);
    }

    #[test]
    fn audience_parses_select_values() {
        assert_eq!(Audience::parse_or_default("suppliers"), Audience::Suppliers);
        assert_eq!(Audience::parse_or_default("everyone"), Audience::All);
    }

    #[test]
    fn audience_defaults_when_missing() {
        let req: AnnouncementRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.audience, Audience::All);
    }
}
