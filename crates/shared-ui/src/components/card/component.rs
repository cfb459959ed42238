use dioxus::prelude::*;

/// Bordered surface used for every dashboard and marketing panel.
///
/// `hoverable` lifts the card on hover, for clickable tiles such as contact
/// methods and homepage steps.
#[component]
pub fn Card(
    #[props(default = false)] hoverable: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "gd-card", None, false),
        Attribute::new("data-hoverable", hoverable.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "gd-card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! { div { ..merged, {children} } }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "gd-card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! { h3 { ..merged, {children} } }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "gd-card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! { p { ..merged, {children} } }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "gd-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! { div { ..merged, {children} } }
}
