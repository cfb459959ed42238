use dioxus::prelude::*;

/// Labelled multi-line text field for order notes and contact messages.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "gd-textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "gd-textarea-field",
            if !label.is_empty() {
                span { class: "gd-textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                rows: rows,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
