use dioxus::prelude::*;

/// Dashboard banner: greeting title, subtitle and action buttons on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "gd-page-header",
            div { class: "gd-page-heading",
                h1 { class: "gd-page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "gd-page-subtitle", "{subtitle}" }
                }
            }
            div { class: "gd-page-actions", {children} }
        }
    }
}
