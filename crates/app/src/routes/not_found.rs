use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_effect(move || {
        tracing::warn!(path = %format!("/{}", route.join("/")), "no route matched");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Oops! The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Return to Home"
                }
            }
        }
    }
}
