use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdPencil, LdPlus, LdSearch, LdTrash2};
use dioxus_free_icons::Icon;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{catalog, marketing, NewOrderRequest, Order, OrderBook};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, PageHeader, TabContent, TabList, TabTrigger,
    Tabs, Textarea, ToastOptions,
};

use super::{member_badge, order_badge};
use crate::components::{GlyphIcon, StatGrid};
use crate::session::use_session;

/// Orders shown in the overview's "Today's Activity" card.
const ACTIVITY_PREVIEW: usize = 2;

fn matches_search(order: &Order, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || order.id.to_lowercase().contains(&query)
        || order.items.to_lowercase().contains(&query)
}

#[component]
pub fn VendorDashboard() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut active_tab = use_signal(|| "overview".to_string());
    let mut book = use_signal(|| OrderBook::new(catalog::vendor_orders()));
    let mut rng = use_signal(|| StdRng::seed_from_u64(Local::now().timestamp_millis() as u64));
    let mut draft = use_signal(NewOrderRequest::default);
    let mut search = use_signal(String::new);

    let handle_place = move |evt: FormEvent| {
        evt.prevent_default();
        let placed = book
            .write()
            .place(&draft.read(), &mut *rng.write(), Local::now().date_naive())
            .map(|order| order.id.clone());

        match placed {
            Ok(id) => {
                tracing::info!(order_id = %id, "order placed");
                toast.success(
                    "Order Placed Successfully!".to_string(),
                    ToastOptions::new()
                        .description("Your order has been added to the group delivery queue."),
                );
                draft.set(NewOrderRequest::default());
                active_tab.set("my-orders".to_string());
            }
            Err(e) => {
                toast.error(
                    "Missing Information".to_string(),
                    ToastOptions::new().description(e.message),
                );
            }
        }
    };

    let name = session.display_name();
    let group = catalog::todays_group();
    let recent = book.read().recent(ACTIVITY_PREVIEW).to_vec();
    let visible: Vec<Order> = book
        .read()
        .orders()
        .iter()
        .filter(|o| matches_search(o, &search.read()))
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                title: "Welcome back, {name}!",
                subtitle: "Manage your orders and track deliveries",
                Button {
                    variant: ButtonVariant::Hero,
                    onclick: move |_| active_tab.set("place-order".to_string()),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "New Order"
                }
            }

            StatGrid { stats: catalog::vendor_stats() }

            Tabs {
                value: Some(active_tab()),
                on_value_change: move |value: String| active_tab.set(value),
                horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "place-order", index: 1usize, "Place Order" }
                    TabTrigger { value: "my-orders", index: 2usize, "My Orders" }
                    TabTrigger { value: "group-details", index: 3usize, "Group Details" }
                }

                TabContent { value: "overview", index: 0usize,
                    div { class: "dashboard-columns",
                        Card {
                            CardHeader {
                                CardTitle { "Today's Activity" }
                                CardDescription { "Your delivery status for today" }
                            }
                            CardContent { class: "dashboard-list",
                                for order in recent {
                                    div { key: "{order.id}", class: "dashboard-item",
                                        div { class: "dashboard-item-head",
                                            span { class: "dashboard-item-title", "{order.id}" }
                                            Badge { variant: order_badge(order.status), "{order.status.label()}" }
                                        }
                                        p { class: "dashboard-muted", "{order.items}" }
                                        div { class: "dashboard-item-foot",
                                            span { "Group of {order.group_size} • Saved {order.saved_amount}" }
                                            span { class: "dashboard-strong", "{order.cost} • {order.time}" }
                                        }
                                    }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Vendor Benefits" }
                                CardDescription { "Why join our delivery network" }
                            }
                            CardContent { class: "dashboard-list",
                                for benefit in marketing::vendor_benefits() {
                                    div { key: "{benefit.title}", class: "dashboard-benefit",
                                        div { class: "dashboard-benefit-icon {benefit.tone.class()}",
                                            GlyphIcon { glyph: benefit.glyph, size: 20 }
                                        }
                                        div {
                                            h4 { "{benefit.title}" }
                                            p { class: "dashboard-muted", "{benefit.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                TabContent { value: "place-order", index: 1usize,
                    Card {
                        CardHeader {
                            CardTitle { "Place New Order" }
                            CardDescription { "Add items to your delivery request" }
                        }
                        CardContent {
                            form { class: "dashboard-form", onsubmit: handle_place,
                                Textarea {
                                    label: "Items & Quantities",
                                    placeholder: "e.g., Rice 5kg, Dal 2kg, Milk 2L",
                                    rows: 3,
                                    value: draft.read().items.clone(),
                                    on_input: move |e: FormEvent| draft.write().items = e.value(),
                                }
                                Input {
                                    label: "Preferred Delivery Time",
                                    input_type: "datetime-local",
                                    value: draft.read().delivery_time.clone(),
                                    on_input: move |e: FormEvent| draft.write().delivery_time = e.value(),
                                }
                                Textarea {
                                    label: "Delivery Address",
                                    placeholder: "Enter complete delivery address",
                                    rows: 2,
                                    value: draft.read().address.clone(),
                                    on_input: move |e: FormEvent| draft.write().address = e.value(),
                                }
                                Textarea {
                                    label: "Special Instructions (Optional)",
                                    placeholder: "Any special delivery notes",
                                    rows: 2,
                                    value: draft.read().notes.clone(),
                                    on_input: move |e: FormEvent| draft.write().notes = e.value(),
                                }
                                Button {
                                    variant: ButtonVariant::Hero,
                                    size: ButtonSize::Large,
                                    button_type: "submit",
                                    class: "dashboard-submit",
                                    "Confirm Order for Tomorrow"
                                }
                            }
                        }
                    }
                }

                TabContent { value: "my-orders", index: 2usize,
                    Card {
                        CardHeader { class: "dashboard-card-head",
                            div {
                                CardTitle { "My Orders" }
                                CardDescription { "View and manage your order history" }
                            }
                            div { class: "dashboard-search",
                                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                                Input {
                                    placeholder: "Search orders...",
                                    value: search(),
                                    on_input: move |e: FormEvent| search.set(e.value()),
                                }
                            }
                        }
                        CardContent { class: "dashboard-list",
                            for order in visible {
                                OrderRow { key: "{order.id}", order }
                            }
                        }
                    }
                }

                TabContent { value: "group-details", index: 3usize,
                    Card {
                        CardHeader {
                            CardTitle { "Group Delivery Details" }
                            CardDescription { "See which vendors are grouped with your orders" }
                        }
                        CardContent {
                            div { class: "dashboard-highlight",
                                h4 { "Today's Group (Order #{group.order_id})" }
                                div { class: "dashboard-columns",
                                    div {
                                        p { class: "dashboard-muted", "Drop Location" }
                                        p { class: "dashboard-strong", "{group.drop_location}" }
                                    }
                                    div {
                                        p { class: "dashboard-muted", "Expected Arrival" }
                                        p { class: "dashboard-strong", "{group.expected_arrival}" }
                                    }
                                }
                            }
                            h4 { "Grouped Vendors" }
                            div { class: "dashboard-list",
                                for member in group.members {
                                    div { key: "{member.name}", class: "dashboard-item dashboard-item-head",
                                        div {
                                            p { class: "dashboard-item-title", "{member.name}" }
                                            p { class: "dashboard-muted", "{member.items}" }
                                        }
                                        Badge { variant: member_badge(member.status), "{member.status.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: Order) -> Element {
    rsx! {
        div { class: "dashboard-item",
            div { class: "dashboard-item-head",
                div {
                    span { class: "dashboard-item-title", "{order.id}" }
                    Badge { variant: order_badge(order.status), "{order.status.label()}" }
                    p { class: "dashboard-muted", "{order.date} at {order.time}" }
                }
                if order.is_editable() {
                    div { class: "dashboard-icon-actions",
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "aria-label": "View order",
                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                        }
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "aria-label": "Edit order",
                            Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                        }
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "aria-label": "Cancel order",
                            Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                        }
                    }
                }
            }
            div { class: "dashboard-order-grid",
                div {
                    p { class: "dashboard-muted", "Items" }
                    p { "{order.items}" }
                }
                div {
                    p { class: "dashboard-muted", "Delivery Partner" }
                    p { "{order.delivery_partner}" }
                }
                div {
                    p { class: "dashboard-muted", "Cost & Savings" }
                    p { class: "dashboard-strong", "{order.cost} (Saved {order.saved_amount})" }
                }
            }
            p { class: "dashboard-muted dashboard-item-note", "Grouped with {order.co_vendors()} other vendors" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_matches_id_and_items_case_insensitively() {
        let orders = catalog::vendor_orders();
        let hits: Vec<_> = orders
            .iter()
            .filter(|o| matches_search(o, "  RICE "))
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(hits, vec!["ORD001"]);
        assert!(matches_search(&orders[2], "ord003"));
    }

    #[test]
    fn blank_search_keeps_every_order() {
        let orders = catalog::vendor_orders();
        assert_eq!(orders.iter().filter(|o| matches_search(o, "")).count(), orders.len());
    }
}
