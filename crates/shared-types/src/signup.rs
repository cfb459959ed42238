use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{AppError, Role, SessionUser};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Step one of signup: personal account details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AccountDetails {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub confirm_password: String,
}

/// Step two of signup: business details. Vehicle fields apply to suppliers only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BusinessDetails {
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub vehicle_type: String,
    pub license_number: String,
}

impl BusinessDetails {
    fn check(&self, role: Role) -> Result<(), AppError> {
        let mut field_errors = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(e) => AppError::from(e).field_errors,
        };
        if role.requires_vehicle_details() {
            if self.vehicle_type.trim().is_empty() {
                field_errors.insert("vehicle_type".into(), "Vehicle type is required".into());
            }
            if self.license_number.trim().is_empty() {
                field_errors.insert(
                    "license_number".into(),
                    "Driving license number is required".into(),
                );
            }
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }
}

/// Everything typed into the two-step signup form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub account: AccountDetails,
    pub business: BusinessDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    #[default]
    Account,
    Business,
}

impl SignupStep {
    pub fn number(&self) -> u8 {
        match self {
            SignupStep::Account => 1,
            SignupStep::Business => 2,
        }
    }
}

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// Step one accepted; the form now shows step two.
    Advanced,
    /// Step two accepted; the session should be written.
    Completed(SessionUser),
}

/// Two-step signup state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignupFlow {
    step: SignupStep,
}

impl SignupFlow {
    pub fn step(&self) -> SignupStep {
        self.step
    }

    /// Handle a submission. The password confirmation is checked on every
    /// submission; a mismatch never changes the step.
    pub fn submit(&mut self, request: &SignupRequest, role: Role) -> Result<SignupOutcome, AppError> {
        if request.account.password != request.account.confirm_password {
            return Err(AppError::bad_request(PASSWORD_MISMATCH));
        }
        match self.step {
            SignupStep::Account => {
                request.account.validate()?;
                self.step = SignupStep::Business;
                Ok(SignupOutcome::Advanced)
            }
            SignupStep::Business => {
                request.business.check(role)?;
                Ok(SignupOutcome::Completed(SessionUser::new(
                    request.account.name.clone(),
                    request.account.email.clone(),
                    role,
                )))
            }
        }
    }

    pub fn back(&mut self) {
        self.step = SignupStep::Account;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    fn account(password: &str, confirm: &str) -> AccountDetails {
        AccountDetails {
            name: "Asha Patel".into(),
            email: "asha@freshmart.in".into(),
            phone: "+91 9876543210".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    fn business() -> BusinessDetails {
        BusinessDetails {
            business_name: "Fresh Mart".into(),
            address: "12 Market Road".into(),
            city: "Mumbai".into(),
            ..Default::default()
        }
    }

    #[test]
    fn mismatched_passwords_block_step_one() {
        let mut flow = SignupFlow::default();
        let req = SignupRequest {
            account: account("secret1", "secret2"),
            business: BusinessDetails::default(),
        };
        let err = flow.submit(&req, Role::Vendor).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, PASSWORD_MISMATCH);
        assert_eq!(flow.step(), SignupStep::Account);
    }

    #[test]
    fn matching_passwords_advance_to_step_two() {
        let mut flow = SignupFlow::default();
        let req = SignupRequest {
            account: account("secret", "secret"),
            business: BusinessDetails::default(),
        };
        assert_eq!(flow.submit(&req, Role::Vendor).unwrap(), SignupOutcome::Advanced);
        assert_eq!(flow.step(), SignupStep::Business);
        assert_eq!(flow.step().number(), 2);
    }

    #[test]
    fn step_two_completes_with_typed_name() {
        let mut flow = SignupFlow::default();
        let req = SignupRequest {
            account: account("secret", "secret"),
            business: business(),
        };
        flow.submit(&req, Role::Vendor).unwrap();
        match flow.submit(&req, Role::Vendor).unwrap() {
            SignupOutcome::Completed(user) => {
                assert_eq!(user.name, "Asha Patel");
                assert_eq!(user.email, "asha@freshmart.in");
                assert_eq!(user.role, Role::Vendor);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_is_rechecked_on_step_two() {
        let mut flow = SignupFlow::default();
        let mut req = SignupRequest {
            account: account("secret", "secret"),
            business: business(),
        };
        flow.submit(&req, Role::Vendor).unwrap();
        req.account.confirm_password = "changed".into();
        assert!(flow.submit(&req, Role::Vendor).is_err());
        assert_eq!(flow.step(), SignupStep::Business);
    }

    #[test]
    fn supplier_needs_vehicle_details() {
        let mut flow = SignupFlow::default();
        let mut req = SignupRequest {
            account: account("secret", "secret"),
            business: business(),
        };
        flow.submit(&req, Role::Supplier).unwrap();
        let err = flow.submit(&req, Role::Supplier).unwrap_err();
        assert!(err.field_errors.contains_key("vehicle_type"));
        assert!(err.field_errors.contains_key("license_number"));

        req.business.vehicle_type = "Van".into();
        req.business.license_number = "MH01 20240001".into();
        assert!(matches!(
            flow.submit(&req, Role::Supplier).unwrap(),
            SignupOutcome::Completed(_)
        ));
    }

    #[test]
    fn empty_business_fields_are_reported() {
        let mut flow = SignupFlow::default();
        let req = SignupRequest {
            account: account("secret", "secret"),
            business: BusinessDetails::default(),
        };
        flow.submit(&req, Role::Admin).unwrap();
        let err = flow.submit(&req, Role::Admin).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("business_name"));
        assert!(err.field_errors.contains_key("city"));
    }

    #[test]
    fn back_returns_to_account_step() {
        let mut flow = SignupFlow::default();
        let req = SignupRequest {
            account: account("secret", "secret"),
            business: BusinessDetails::default(),
        };
        flow.submit(&req, Role::Vendor).unwrap();
        flow.back();
        assert_eq!(flow.step(), SignupStep::Account);
    }
}
