//! Dashboard tab strip over the `dioxus_primitives` tabs.
//!
//! Use `Tabs { value, on_value_change }` when the page needs to switch tabs
//! itself (e.g. after placing an order), `default_value` otherwise.

use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "gd-tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "gd-tab-list", None, false));

    rsx! { prim::TabList { ..props } }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    props.class.get_or_insert_with(|| "gd-tab-trigger".to_string());
    rsx! { prim::TabTrigger { ..props } }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    props.class.get_or_insert_with(|| "gd-tab-content".to_string());
    rsx! { prim::TabContent { ..props } }
}
