use dioxus::prelude::*;
use shared_types::{AnnouncementRequest, ContactMessage, FeatureFlags, Receipt};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the current feature flags. Flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Forward a contact-page message to the support inbox log.
#[cfg_attr(feature = "server", tracing::instrument(skip(message)))]
#[server]
pub async fn submit_contact_message(message: ContactMessage) -> Result<Receipt, ServerFnError> {
    crate::relay::relay_contact(crate::config::feature_flags(), &message)
        .map_err(|e| e.into_server_fn_error())
}

/// Record an admin announcement.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn broadcast_announcement(request: AnnouncementRequest) -> Result<Receipt, ServerFnError> {
    crate::relay::broadcast(&request).map_err(|e| e.into_server_fn_error())
}
