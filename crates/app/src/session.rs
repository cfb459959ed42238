use dioxus::prelude::*;
use shared_types::{SessionState, SessionUser, SESSION_STORAGE_KEY};

/// Pause shown on the login button before redirecting.
pub const LOGIN_DELAY_MS: u32 = 1500;
/// Pause shown on the signup button before redirecting.
pub const SIGNUP_DELAY_MS: u32 = 2000;

/// Global session state, mirrored to browser local storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub state: Signal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: Signal::new(SessionState::Anonymous),
        }
    }

    /// Replace the current user and persist the record.
    pub fn sign_in(&self, user: SessionUser) {
        match user.encode() {
            Ok(raw) => write_storage(SESSION_STORAGE_KEY, &raw),
            Err(e) => tracing::warn!(error = %e.message, "session not persisted"),
        }
        tracing::info!(role = %user.role, "session started");
        let mut state = self.state;
        state.write().authenticate(user);
    }

    /// Load the persisted record, if any, into the session.
    pub async fn restore(&self) {
        let raw = read_storage(SESSION_STORAGE_KEY).await;
        let restored = SessionState::from_stored(raw.as_deref());
        if raw.is_some() && restored == SessionState::Anonymous {
            tracing::warn!("ignoring unreadable session record");
        }
        let mut state = self.state;
        state.set(restored);
    }

    pub fn display_name(&self) -> String {
        self.state.read().display_name().to_string()
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

fn write_storage(key: &str, value: &str) {
    let key = serde_json::to_string(key).unwrap_or_default();
    let value = serde_json::to_string(value).unwrap_or_default();
    document::eval(&format!(
        r#"
        try {{
            window.localStorage.setItem({key}, {value});
        }} catch(e) {{}}
        "#,
    ));
}

async fn read_storage(key: &str) -> Option<String> {
    let key = serde_json::to_string(key).unwrap_or_default();
    document::eval(&format!(
        r#"
        try {{
            return window.localStorage.getItem({key});
        }} catch(e) {{
            return null;
        }}
        "#,
    ))
    .join::<Option<String>>()
    .await
    .ok()
    .flatten()
}

/// Wait `ms` milliseconds on the browser clock.
pub async fn pause(ms: u32) {
    let _ = document::eval(&format!(
        "await new Promise(r => setTimeout(r, {ms})); return true;"
    ))
    .join::<bool>()
    .await;
}
