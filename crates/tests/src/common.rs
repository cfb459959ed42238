use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{
    AccountDetails, BusinessDetails, FeatureFlags, NewOrderRequest, SessionState, SessionUser,
    SignupRequest, SESSION_STORAGE_KEY,
};
use std::collections::HashMap;
use tower::ServiceExt;

/// Stand-in for browser local storage: string keys to string values.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Write the session record the way a login or signup submission does.
    pub fn store_session(&mut self, user: &SessionUser) {
        let raw = user.encode().unwrap();
        self.set_item(SESSION_STORAGE_KEY, raw);
    }

    /// Session as a freshly loaded page would restore it.
    pub fn restore_session(&self) -> SessionState {
        SessionState::from_stored(self.get_item(SESSION_STORAGE_KEY))
    }
}

/// A fully filled signup form with matching passwords.
pub fn signup_request() -> SignupRequest {
    SignupRequest {
        account: AccountDetails {
            name: "Asha Patel".into(),
            email: "asha@freshmart.in".into(),
            phone: "+91 9876543210".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
        },
        business: BusinessDetails {
            business_name: "Fresh Mart".into(),
            address: "Shop 4, Central Market".into(),
            city: "Noida".into(),
            vehicle_type: String::new(),
            license_number: String::new(),
        },
    }
}

pub fn order_request() -> NewOrderRequest {
    NewOrderRequest {
        items: "Rice 5kg, Dal 2kg".into(),
        delivery_time: "2024-01-18T09:15".into(),
        address: "Shop 4, Central Market".into(),
        notes: "Back entrance".into(),
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()
}

/// REST router with the given flags, as mounted by the app server.
pub fn test_app(flags: FeatureFlags) -> Router {
    server::rest::api_router(flags)
}

/// Helper to make a POST request with JSON body and return (status, body).
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
