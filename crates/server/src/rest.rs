//! JSON endpoints mirroring the server functions, for non-Dioxus clients.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use shared_types::{AnnouncementRequest, AppError, ContactMessage, FeatureFlags, Receipt};

use crate::{health, relay};

/// `/health` plus the `/api/v1` routes, bound to the given flags.
pub fn api_router(flags: FeatureFlags) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/contact", post(submit_contact))
        .route("/api/v1/announcements", post(create_announcement))
        .with_state(flags)
}

async fn submit_contact(
    State(flags): State<FeatureFlags>,
    Json(message): Json<ContactMessage>,
) -> Result<(StatusCode, Json<Receipt>), AppError> {
    let receipt = relay::relay_contact(&flags, &message)?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

async fn create_announcement(
    Json(request): Json<AnnouncementRequest>,
) -> Result<(StatusCode, Json<Receipt>), AppError> {
    let receipt = relay::broadcast(&request)?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
