use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Shown when a server failure carries no readable error.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Toast headline plus per-field messages for a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFeedback {
    pub headline: String,
    pub field_errors: HashMap<String, String>,
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Replace the headline message, keeping kind and field errors.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Recover the error carried inside a `ServerFnError.to_string()`.
    ///
    /// The wire text looks like
    ///   `error running server function: {"kind":"BadRequest",...} (details: None)`
    /// so the JSON object between the first `{` and last `}` is parsed.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// What a form should show after a failed server call.
    pub fn feedback(error_string: &str) -> FormFeedback {
        match Self::from_server_error(error_string) {
            Some(err) => FormFeedback {
                headline: err.message,
                field_errors: err.field_errors,
            },
            None => FormFeedback {
                headline: GENERIC_FAILURE.to_string(),
                field_errors: HashMap::new(),
            },
        }
    }

    /// Headline text for a failed server call.
    pub fn friendly_message(error_string: &str) -> String {
        Self::feedback(error_string).headline
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"BadRequest","message":"Subject is required"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Subject is required");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Route not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Route not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(AppError::friendly_message("garbage input"), GENERIC_FAILURE);
    }

    #[test]
    fn feedback_carries_headline_and_fields() {
        let wrapped = r#"error: {"kind":"ValidationError","message":"Validation failed","field_errors":{"email":"Email is required"}}"#;
        let feedback = AppError::feedback(wrapped);
        assert_eq!(feedback.headline, "Validation failed");
        assert_eq!(
            feedback.field_errors.get("email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn feedback_for_transport_failure_has_no_fields() {
        let feedback = AppError::feedback("error reaching server: connection refused");
        assert_eq!(feedback.headline, GENERIC_FAILURE);
        assert!(feedback.field_errors.is_empty());
    }

    #[test]
    fn with_message_keeps_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("items".to_string(), "Items are required".to_string());
        let err = AppError::validation("Validation failed", fields).with_message("Missing Information");
        assert_eq!(err.message, "Missing Information");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("items"));
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::not_found("").status_code_u16(), 404);
        assert_eq!(AppError::bad_request("").status_code_u16(), 400);
        assert_eq!(
            AppError::validation("", HashMap::new()).status_code_u16(),
            422
        );
        assert_eq!(AppError::internal("").status_code_u16(), 500);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::bad_request("Passwords do not match!");
        assert_eq!(format!("{}", err), "BadRequest: Passwords do not match!");
    }
}
