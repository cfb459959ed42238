use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use shared_types::FeatureFlags;
use tower::ServiceExt;

/// Build the REST router with the given flags.
pub fn test_app(flags: FeatureFlags) -> Router {
    server::rest::api_router(flags)
}

/// Flags with the contact relay switched on.
#[allow(dead_code)]
pub fn relay_enabled() -> FeatureFlags {
    FeatureFlags {
        contact_relay: true,
        ..Default::default()
    }
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
