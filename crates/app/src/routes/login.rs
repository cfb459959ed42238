use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use shared_types::{LoginRequest, Role};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, ToastOptions,
};
use std::collections::HashMap;

use crate::components::RoleTabs;
use crate::routes::Route;
use crate::session::{pause, use_session, LOGIN_DELAY_MS};

/// Login page. Any non-empty email and password signs in as the selected role.
#[component]
pub fn Login(role: Option<String>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut active_role = use_signal(|| Role::parse_or_default(role.as_deref().unwrap_or("")));
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        field_errors.set(HashMap::new());

        let role = active_role();
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        let user = match request.into_session_user(role) {
            Ok(user) => user,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };

        loading.set(true);
        pause(LOGIN_DELAY_MS).await;

        let name = user.name.clone();
        session.sign_in(user);
        toast.success(
            "Login Successful!".to_string(),
            ToastOptions::new().description(format!("Welcome back, {name}!")),
        );
        loading.set(false);
        navigator().push(Route::dashboard(role));
    };

    let current = active_role();
    let err = |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-heading",
                    h1 { "Welcome Back" }
                    p { "Sign in to your GroupDeliver account" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        RoleTabs { role: current, on_change: move |r| active_role.set(r) }
                        CardTitle { "{current.login_title()}" }
                        CardDescription { "{current.login_description()}" }
                    }
                    CardContent {
                        form { class: "auth-form", onsubmit: handle_login,
                            Input {
                                label: "Email",
                                input_type: "email",
                                placeholder: "Enter your email",
                                value: email(),
                                error: err("email"),
                                required: true,
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            div { class: "auth-password",
                                Input {
                                    label: "Password",
                                    input_type: if show_password() { "text" } else { "password" },
                                    placeholder: "Enter your password",
                                    value: password(),
                                    error: err("password"),
                                    required: true,
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                PasswordToggle { shown: show_password(), on_toggle: move |_| show_password.toggle() }
                            }

                            div { class: "auth-row",
                                label { class: "auth-check",
                                    input { r#type: "checkbox" }
                                    span { "Remember me" }
                                }
                                Link { class: "auth-link", to: Route::Contact {}, "Forgot password?" }
                            }

                            Button {
                                variant: ButtonVariant::Hero,
                                button_type: "submit",
                                disabled: loading(),
                                class: "auth-submit",
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }

                        p { class: "auth-switch",
                            "Don't have an account? "
                            Link { class: "auth-link", to: Route::signup(current), "Sign up here" }
                        }

                        div { class: "auth-demo",
                            p { class: "auth-demo-title", "Demo Credentials:" }
                            p { strong { "Email: " } "demo@groupdeliver.com" }
                            p { strong { "Password: " } "demo123" }
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

/// Eye button that reveals or hides a password field.
#[component]
pub fn PasswordToggle(shown: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "auth-password-toggle",
            r#type: "button",
            "aria-label": if shown { "Hide password" } else { "Show password" },
            onclick: move |e| on_toggle.call(e),
            if shown {
                Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
            } else {
                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
            }
        }
    }
}
