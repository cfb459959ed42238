use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::error_convert::AppErrorExt;
use shared_types::{
    AnnouncementRequest, AppError, AppErrorKind, Audience, ContactCategory, ContactMessage,
    FeatureFlags, Receipt,
};

use crate::common::{post_json, test_app};

fn contact_message() -> ContactMessage {
    ContactMessage {
        name: "Asha Patel".into(),
        email: "asha@freshmart.in".into(),
        category: ContactCategory::Delivery,
        subject: "Late delivery".into(),
        message: "ORD002 arrived an hour late.".into(),
    }
}

#[tokio::test]
async fn contact_form_reaches_the_relay_when_enabled() {
    let app = test_app(FeatureFlags {
        contact_relay: true,
        ..Default::default()
    });
    let body = serde_json::to_string(&contact_message()).unwrap();
    let (status, body) = post_json(&app, "/api/v1/contact", &body).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    let receipt: Receipt = serde_json::from_str(&body).unwrap();
    assert!(receipt.reference.starts_with("MSG-"));
}

#[tokio::test]
async fn default_announcement_is_accepted() {
    let app = test_app(FeatureFlags::default());
    let body = serde_json::to_string(&AnnouncementRequest::default()).unwrap();
    let (status, body) = post_json(&app, "/api/v1/announcements", &body).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    let receipt: Receipt = serde_json::from_str(&body).unwrap();
    assert!(receipt.reference.starts_with("ANN-"));
}

#[tokio::test]
async fn blank_announcement_returns_field_errors() {
    let app = test_app(FeatureFlags::default());
    let request = AnnouncementRequest {
        audience: Audience::Vendors,
        message: "  ".into(),
    };
    let body = serde_json::to_string(&request).unwrap();
    let (status, body) = post_json(&app, "/api/v1/announcements", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("message"));
}

#[test]
fn server_fn_errors_come_back_as_form_errors() {
    let invalid = ContactMessage {
        email: "not-an-email".into(),
        ..contact_message()
    };
    let err = invalid.normalized().unwrap_err();
    let wire = err.clone().into_server_fn_error().to_string();

    let recovered = AppError::from_server_error(&wire).unwrap();
    assert_eq!(recovered, err);
    assert!(AppError::feedback(&wire).field_errors.contains_key("email"));
    assert_eq!(AppError::friendly_message(&wire), err.message);
}
