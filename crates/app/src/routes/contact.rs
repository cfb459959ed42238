use dioxus::prelude::*;
use shared_types::{marketing, AppError, ContactCategory, ContactMessage, FeatureFlags};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, Input, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::components::GlyphIcon;

/// Form category preselected by each "Quick Support" button, in display order.
const QUICK_SUPPORT: [ContactCategory; 4] = [
    ContactCategory::Delivery,
    ContactCategory::Missing,
    ContactCategory::Account,
    ContactCategory::General,
];

#[component]
pub fn Contact() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./contact.css") }

        div { class: "contact-page",
            div { class: "contact-hero",
                h1 { "Contact & Support" }
                p { "Get help, report issues, or ask questions. We're here to assist you with GroupDeliver." }
            }

            div { class: "contact-container",
                div { class: "contact-methods",
                    for method in marketing::contact_methods() {
                        a {
                            key: "{method.title}",
                            class: "contact-method",
                            href: method.href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Card { hoverable: true,
                                CardContent { class: "contact-method-body",
                                    div { class: "contact-method-icon", GlyphIcon { glyph: method.glyph, size: 24 } }
                                    h3 { "{method.title}" }
                                    p { class: "contact-muted", "{method.description}" }
                                    p { class: "contact-method-value", "{method.value}" }
                                }
                            }
                        }
                    }
                }

                ContactBody {}
            }
        }
    }
}

#[component]
fn ContactBody() -> Element {
    let relay = use_context::<FeatureFlags>().contact_relay;
    let toast = use_toast();
    let mut form = use_signal(ContactMessage::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut sending = use_signal(|| false);
    let mut show_all_faqs = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        field_errors.set(HashMap::new());

        let message = match form.read().normalized() {
            Ok(message) => message,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };

        if relay {
            sending.set(true);
            let result = server::api::submit_contact_message(message).await;
            sending.set(false);
            if let Err(e) = result {
                let feedback = AppError::feedback(&e.to_string());
                field_errors.set(feedback.field_errors);
                toast.error(feedback.headline, ToastOptions::new());
                return;
            }
        }

        toast.success(
            "Message Sent Successfully!".to_string(),
            ToastOptions::new().description("We'll get back to you within 24 hours."),
        );
        form.set(ContactMessage::default());
    };

    let err = |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();
    let faqs = marketing::faq();
    let shown = if show_all_faqs() {
        faqs.len()
    } else {
        marketing::FAQ_PREVIEW_LEN
    };

    rsx! {
        div { class: "contact-grid",
            Card {
                CardHeader {
                    CardTitle { "Send us a Message" }
                    CardDescription { "Fill out the form below and we'll get back to you soon" }
                }
                CardContent {
                    form { class: "contact-form", onsubmit: handle_submit,
                        div { class: "contact-form-row",
                            Input {
                                label: "Full Name",
                                placeholder: "Your name",
                                value: form.read().name.clone(),
                                error: err("name"),
                                required: true,
                                on_input: move |e: FormEvent| form.write().name = e.value(),
                            }
                            Input {
                                label: "Email Address",
                                input_type: "email",
                                placeholder: "your@email.com",
                                value: form.read().email.clone(),
                                error: err("email"),
                                required: true,
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                        }
                        FormSelect {
                            label: "Category",
                            value: form.read().category.as_str().to_string(),
                            onchange: move |e: FormEvent| {
                                form.write().category = ContactCategory::parse_or_default(&e.value());
                            },
                            for category in ContactCategory::ALL {
                                option {
                                    key: "{category.as_str()}",
                                    value: category.as_str(),
                                    selected: form.read().category == category,
                                    "{category.label()}"
                                }
                            }
                        }
                        Input {
                            label: "Subject",
                            placeholder: "Brief description of your inquiry",
                            value: form.read().subject.clone(),
                            error: err("subject"),
                            required: true,
                            on_input: move |e: FormEvent| form.write().subject = e.value(),
                        }
                        Textarea {
                            label: "Message",
                            placeholder: "Please provide details about your inquiry or issue",
                            rows: 5,
                            value: form.read().message.clone(),
                            required: true,
                            on_input: move |e: FormEvent| form.write().message = e.value(),
                        }
                        if let Some(message) = field_errors.read().get("message") {
                            p { class: "gd-field-error", "{message}" }
                        }
                        Button {
                            variant: ButtonVariant::Hero,
                            button_type: "submit",
                            disabled: sending(),
                            class: "contact-submit",
                            if sending() { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }

            div { class: "contact-side",
                Card {
                    CardHeader {
                        CardTitle { "Quick Support" }
                        CardDescription { "Common support categories" }
                    }
                    CardContent { class: "contact-quick",
                        for (support, category) in marketing::support_categories().into_iter().zip(QUICK_SUPPORT) {
                            Button {
                                key: "{support.title}",
                                variant: ButtonVariant::Outline,
                                class: "contact-quick-button",
                                onclick: move |_| form.write().category = category,
                                GlyphIcon { glyph: support.glyph, size: 20 }
                                span { "{support.title}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Frequently Asked Questions" }
                        CardDescription { "Find quick answers to common questions" }
                    }
                    CardContent {
                        div { class: "contact-faq",
                            for item in faqs.into_iter().take(shown) {
                                div { key: "{item.question}", class: "contact-faq-item",
                                    h4 { "{item.question}" }
                                    p { class: "contact-muted", "{item.answer}" }
                                }
                            }
                        }
                        if !show_all_faqs() {
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "contact-faq-more",
                                onclick: move |_| show_all_faqs.set(true),
                                "View All FAQs"
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Business Hours" }
                        CardDescription { "When you can reach us" }
                    }
                    CardContent { class: "contact-hours",
                        for (channel, hours, glyph) in marketing::business_hours() {
                            div { key: "{channel}", class: "contact-hours-row",
                                GlyphIcon { glyph, size: 20 }
                                div {
                                    p { class: "contact-hours-channel", "{channel}" }
                                    p { class: "contact-muted", "{hours}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
