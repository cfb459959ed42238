use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, Role, SessionState, SessionUser, SESSION_STORAGE_KEY};

use crate::common::MemoryStorage;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn any_credentials_sign_in_to_the_selected_dashboard() {
    for role in Role::ALL {
        let user = login("demo@groupdeliver.com", "demo123")
            .into_session_user(role)
            .unwrap();
        assert_eq!(user.role, role);
        assert_eq!(user.role.dashboard_path(), format!("/{}-dashboard", role.as_str()));
    }
}

#[test]
fn blank_credentials_never_reach_storage() {
    let mut storage = MemoryStorage::default();
    let result = login("", "").into_session_user(Role::Vendor);

    let err = result.unwrap_err();
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
    assert_eq!(storage.restore_session(), SessionState::Anonymous);

    storage.set_item("unrelated", "value".into());
    assert_eq!(storage.restore_session(), SessionState::Anonymous);
}

#[test]
fn reload_keeps_the_personalized_name() {
    let mut storage = MemoryStorage::default();
    let user = login("asha@freshmart.in", "pw")
        .into_session_user(Role::Supplier)
        .unwrap();
    storage.store_session(&user);

    let restored = storage.restore_session();
    assert_eq!(restored.display_name(), "Jane Supplier");
    assert_eq!(restored.role(), Some(Role::Supplier));
    assert_eq!(restored.user().map(|u| u.id.as_str()), Some(user.id.as_str()));
}

#[test]
fn later_login_overwrites_the_stored_user() {
    let mut storage = MemoryStorage::default();
    storage.store_session(&SessionUser::new("First", "a@x.in", Role::Vendor));
    storage.store_session(&SessionUser::new("Second", "b@x.in", Role::Admin));

    let restored = storage.restore_session();
    assert_eq!(restored.display_name(), "Second");
    assert_eq!(restored.role(), Some(Role::Admin));
}

#[test]
fn corrupted_record_restores_as_anonymous() {
    let mut storage = MemoryStorage::default();
    storage.set_item(SESSION_STORAGE_KEY, "{not json".into());

    let restored = storage.restore_session();
    assert_eq!(restored, SessionState::Anonymous);
    assert_eq!(restored.display_name(), "");
}
