use pretty_assertions::assert_eq;
use shared_types::{Role, SignupFlow, SignupOutcome, SignupStep, PASSWORD_MISMATCH};

use crate::common::{signup_request, MemoryStorage};

#[test]
fn mismatched_passwords_block_step_one() {
    let mut flow = SignupFlow::default();
    let mut request = signup_request();
    request.account.confirm_password = "different".into();

    let err = flow.submit(&request, Role::Vendor).unwrap_err();
    assert_eq!(err.message, PASSWORD_MISMATCH);
    assert_eq!(flow.step(), SignupStep::Account);
}

#[test]
fn matching_passwords_advance_to_business_details() {
    let mut flow = SignupFlow::default();
    let outcome = flow.submit(&signup_request(), Role::Vendor).unwrap();

    assert_eq!(outcome, SignupOutcome::Advanced);
    assert_eq!(flow.step(), SignupStep::Business);
    assert_eq!(flow.step().number(), 2);
}

#[test]
fn completed_vendor_signup_is_stored_under_the_typed_name() {
    let mut flow = SignupFlow::default();
    let request = signup_request();
    flow.submit(&request, Role::Vendor).unwrap();

    let user = match flow.submit(&request, Role::Vendor).unwrap() {
        SignupOutcome::Completed(user) => user,
        other => panic!("expected completion, got {other:?}"),
    };

    let mut storage = MemoryStorage::default();
    storage.store_session(&user);
    let restored = storage.restore_session();
    assert_eq!(restored.display_name(), "Asha Patel");
    assert_eq!(restored.role().map(|r| r.dashboard_path()), Some("/vendor-dashboard".into()));
}

#[test]
fn supplier_signup_needs_vehicle_details() {
    let mut flow = SignupFlow::default();
    let mut request = signup_request();
    flow.submit(&request, Role::Supplier).unwrap();

    let err = flow.submit(&request, Role::Supplier).unwrap_err();
    assert!(err.field_errors.contains_key("vehicle_type"));
    assert!(err.field_errors.contains_key("license_number"));
    assert_eq!(flow.step(), SignupStep::Business);

    request.business.vehicle_type = "Van".into();
    request.business.license_number = "DL-0420110012345".into();
    let outcome = flow.submit(&request, Role::Supplier).unwrap();
    assert!(matches!(outcome, SignupOutcome::Completed(user) if user.role == Role::Supplier));
}

#[test]
fn back_returns_to_step_one_without_losing_progress_rules() {
    let mut flow = SignupFlow::default();
    flow.submit(&signup_request(), Role::Admin).unwrap();
    flow.back();

    assert_eq!(flow.step(), SignupStep::Account);
    assert_eq!(
        flow.submit(&signup_request(), Role::Admin).unwrap(),
        SignupOutcome::Advanced
    );
}
