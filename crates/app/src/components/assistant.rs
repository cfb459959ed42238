use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMessageCircle, LdSend, LdX};
use dioxus_free_icons::Icon;
use shared_types::assistant;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Speaker {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq)]
struct ChatLine {
    speaker: Speaker,
    text: String,
}

impl ChatLine {
    fn bot(text: &str) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.to_string(),
        }
    }
}

/// Floating help chat mounted on every page. History is kept per page load.
#[component]
pub fn Assistant() -> Element {
    let mut open = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut history = use_signal(|| vec![ChatLine::bot(assistant::GREETING)]);

    let mut send = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        let reply = assistant::reply_to(&text);
        let mut lines = history.write();
        lines.push(ChatLine {
            speaker: Speaker::User,
            text,
        });
        lines.push(ChatLine::bot(reply));
        draft.set(String::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assistant.css") }

        if open() {
            div { class: "assistant-panel", role: "dialog", "aria-label": "GroupDeliver assistant",
                div { class: "assistant-header",
                    span { "GroupDeliver Assistant" }
                    button {
                        class: "assistant-icon-button",
                        "aria-label": "Close assistant",
                        onclick: move |_| open.set(false),
                        Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                    }
                }
                div { class: "assistant-history",
                    for (i, line) in history.read().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if line.speaker == Speaker::User { "assistant-line user" } else { "assistant-line bot" },
                            "{line.text}"
                        }
                    }
                }
                form {
                    class: "assistant-input",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        send();
                    },
                    input {
                        r#type: "text",
                        placeholder: "Ask a question...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { class: "assistant-icon-button", r#type: "submit", "aria-label": "Send",
                        Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                    }
                }
            }
        }

        button {
            class: "assistant-toggle",
            "aria-label": "Open assistant",
            onclick: move |_| open.toggle(),
            if open() {
                Icon::<LdX> { icon: LdX, width: 24, height: 24 }
            } else {
                Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 24, height: 24 }
            }
        }
    }
}
