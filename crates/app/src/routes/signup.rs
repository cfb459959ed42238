use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTruck;
use dioxus_free_icons::Icon;
use shared_types::{Role, SignupFlow, SignupOutcome, SignupRequest, SignupStep, PASSWORD_MISMATCH};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Textarea, ToastOptions,
};
use std::collections::HashMap;

use super::login::PasswordToggle;
use crate::components::RoleTabs;
use crate::routes::Route;
use crate::session::{pause, use_session, SIGNUP_DELAY_MS};

/// Two-step signup: account details, then business details.
#[component]
pub fn Signup(role: Option<String>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut active_role = use_signal(|| Role::parse_or_default(role.as_deref().unwrap_or("")));
    let mut flow = use_signal(SignupFlow::default);
    let mut form = use_signal(SignupRequest::default);
    let mut show_password = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        field_errors.set(HashMap::new());

        let role = active_role();
        let outcome = flow.write().submit(&form.read(), role);

        match outcome {
            Ok(SignupOutcome::Advanced) => {}
            Ok(SignupOutcome::Completed(user)) => {
                loading.set(true);
                pause(SIGNUP_DELAY_MS).await;

                let name = user.name.clone();
                session.sign_in(user);
                toast.success(
                    "Account Created!".to_string(),
                    ToastOptions::new().description(format!("Welcome to GroupDeliver, {name}!")),
                );
                loading.set(false);
                navigator().push(Route::dashboard(role));
            }
            Err(e) if e.message == PASSWORD_MISMATCH => {
                toast.error(
                    "Error".to_string(),
                    ToastOptions::new().description(PASSWORD_MISMATCH),
                );
            }
            Err(e) => field_errors.set(e.field_errors),
        }
    };

    let current = active_role();
    let step = flow.read().step();
    let err = |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-column wide",
                div { class: "auth-heading",
                    Icon::<LdTruck> { icon: LdTruck, width: 48, height: 48, class: "tone-primary" }
                    h1 { "Join GroupDeliver" }
                    p { "Create your account and start saving on deliveries" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        RoleTabs { role: current, on_change: move |r| active_role.set(r) }
                        CardTitle { "{current.signup_title()}" }
                        CardDescription { "{current.signup_description()}" }
                    }
                    CardContent {
                        StepProgress { step }

                        form { class: "auth-form", onsubmit: handle_submit,
                            if step == SignupStep::Account {
                                Input {
                                    label: "Full Name",
                                    placeholder: "Enter your full name",
                                    value: form.read().account.name.clone(),
                                    error: err("name"),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().account.name = e.value(),
                                }
                                Input {
                                    label: "Email Address",
                                    input_type: "email",
                                    placeholder: "Enter your email",
                                    value: form.read().account.email.clone(),
                                    error: err("email"),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().account.email = e.value(),
                                }
                                Input {
                                    label: "Phone Number",
                                    input_type: "tel",
                                    placeholder: "+91 9876543210",
                                    value: form.read().account.phone.clone(),
                                    error: err("phone"),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().account.phone = e.value(),
                                }
                                div { class: "auth-password",
                                    Input {
                                        label: "Password",
                                        input_type: password_type,
                                        placeholder: "Create a password",
                                        value: form.read().account.password.clone(),
                                        error: err("password"),
                                        required: true,
                                        on_input: move |e: FormEvent| form.write().account.password = e.value(),
                                    }
                                    PasswordToggle { shown: show_password(), on_toggle: move |_| show_password.toggle() }
                                }
                                Input {
                                    label: "Confirm Password",
                                    input_type: "password",
                                    placeholder: "Confirm your password",
                                    value: form.read().account.confirm_password.clone(),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().account.confirm_password = e.value(),
                                }
                                Button {
                                    variant: ButtonVariant::Hero,
                                    button_type: "submit",
                                    class: "auth-submit",
                                    "Continue"
                                }
                            } else {
                                Input {
                                    label: current.business_name_label(),
                                    placeholder: if current == Role::Vendor { "Your store name" } else { "Your company name" },
                                    value: form.read().business.business_name.clone(),
                                    error: err("business_name"),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().business.business_name = e.value(),
                                }
                                Textarea {
                                    label: "Address",
                                    placeholder: "Complete business address",
                                    rows: 3,
                                    value: form.read().business.address.clone(),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().business.address = e.value(),
                                }
                                Input {
                                    label: "City",
                                    placeholder: "Your city",
                                    value: form.read().business.city.clone(),
                                    error: err("city"),
                                    required: true,
                                    on_input: move |e: FormEvent| form.write().business.city = e.value(),
                                }
                                if current.requires_vehicle_details() {
                                    div { class: "auth-grid",
                                        Input {
                                            label: "Vehicle Type",
                                            placeholder: "e.g., Bike, Car, Van, Truck",
                                            value: form.read().business.vehicle_type.clone(),
                                            error: err("vehicle_type"),
                                            required: true,
                                            on_input: move |e: FormEvent| form.write().business.vehicle_type = e.value(),
                                        }
                                        Input {
                                            label: "Driving License Number",
                                            placeholder: "Enter license number",
                                            value: form.read().business.license_number.clone(),
                                            error: err("license_number"),
                                            required: true,
                                            on_input: move |e: FormEvent| form.write().business.license_number = e.value(),
                                        }
                                    }
                                }
                                if let Some(message) = field_errors.read().get("address") {
                                    p { class: "gd-field-error", "{message}" }
                                }
                                div { class: "auth-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| flow.write().back(),
                                        "Back"
                                    }
                                    Button {
                                        variant: ButtonVariant::Hero,
                                        button_type: "submit",
                                        disabled: loading(),
                                        if loading() { "Creating Account..." } else { "Create Account" }
                                    }
                                }
                            }
                        }

                        p { class: "auth-switch",
                            "Already have an account? "
                            Link { class: "auth-link", to: Route::login(current), "Sign in here" }
                        }
                        p { class: "auth-terms",
                            "By creating an account, you agree to our "
                            Link { class: "auth-link", to: Route::Terms {}, "Terms of Service" }
                            " and "
                            Link { class: "auth-link", to: Route::Privacy {}, "Privacy Policy" }
                        }
                    }
                }

                div { class: "auth-back",
                    Link { to: Route::Home {}, "← Back to Home" }
                }
            }
        }
    }
}

#[component]
fn StepProgress(step: SignupStep) -> Element {
    let second = step == SignupStep::Business;
    rsx! {
        div { class: "auth-progress", "aria-label": "Step {step.number()} of 2",
            span { class: "auth-progress-dot active", "1" }
            span { class: if second { "auth-progress-bar active" } else { "auth-progress-bar" } }
            span { class: if second { "auth-progress-dot active" } else { "auth-progress-dot" }, "2" }
        }
    }
}
