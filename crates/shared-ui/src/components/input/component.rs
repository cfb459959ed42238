use dioxus::prelude::*;

/// Labelled single-line text field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    /// Shown under the field in the error color when non-empty.
    #[props(default)]
    error: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "gd-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "gd-field",
            if !label.is_empty() {
                span { class: "gd-field-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                "aria-invalid": !error.is_empty(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                span { class: "gd-field-error", "{error}" }
            }
        }
    }
}
