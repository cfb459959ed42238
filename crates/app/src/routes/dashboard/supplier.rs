use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdDownload, LdFileText, LdMapPin, LdMessageCircle, LdMessageSquare, LdNavigation, LdPhone,
    LdRoute, LdTruck,
};
use dioxus_free_icons::Icon;
use shared_types::{catalog, DeliveryRoute, RouteStop};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, Separator, TabContent, TabList, TabTrigger, Tabs,
    ToastOptions,
};

use super::route_badge;
use crate::components::{MetricList, StatGrid};
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn SupplierDashboard() -> Element {
    let session = use_session();
    let toast = use_toast();

    let start_route = move |route_id: Option<String>| {
        tracing::info!(route_id = ?route_id, "route started");
        toast.success(
            "Route Started".to_string(),
            ToastOptions::new().description("GPS navigation activated. Vendors have been notified."),
        );
    };

    let name = session.display_name();
    let routes = catalog::supplier_routes();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                title: "Supplier Dashboard",
                subtitle: "Welcome back, {name}! Manage your delivery routes",
                Link { to: Route::Contact {},
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 }
                        "Support Chat"
                    }
                }
                Button {
                    variant: ButtonVariant::Hero,
                    onclick: move |_| start_route(None),
                    Icon::<LdTruck> { icon: LdTruck, width: 16, height: 16 }
                    "Start Delivery"
                }
            }

            StatGrid { stats: catalog::supplier_stats() }

            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "orders", index: 1usize, "Order Summary" }
                    TabTrigger { value: "routes", index: 2usize, "Route Map" }
                    TabTrigger { value: "billing", index: 3usize, "Billing" }
                }

                TabContent { value: "overview", index: 0usize,
                    div { class: "dashboard-columns",
                        Card {
                            CardHeader {
                                CardTitle { "Today's Schedule" }
                                CardDescription { "Your planned delivery routes" }
                            }
                            CardContent { class: "dashboard-list",
                                for route in routes.clone() {
                                    ScheduleRow {
                                        key: "{route.id}",
                                        route,
                                        on_start: move |id: String| start_route(Some(id)),
                                    }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Performance Metrics" }
                                CardDescription { "Your delivery performance this week" }
                            }
                            CardContent {
                                MetricList { metrics: catalog::supplier_performance() }
                                div { class: "dashboard-highlight",
                                    p { class: "dashboard-strong", "Excellent Performance!" }
                                    p { class: "dashboard-muted", "You're in the top 10% of suppliers this month." }
                                }
                            }
                        }
                    }
                }

                TabContent { value: "orders", index: 1usize,
                    Card {
                        CardHeader { class: "dashboard-card-head",
                            div {
                                CardTitle { "Order Summary" }
                                CardDescription { "Vendor requests grouped by location" }
                            }
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                "Export"
                            }
                        }
                        CardContent { class: "dashboard-list",
                            for route in routes.clone() {
                                RouteStops { key: "{route.id}", route }
                            }
                        }
                    }
                }

                TabContent { value: "routes", index: 2usize,
                    Card {
                        CardHeader {
                            CardTitle { "Route Map & Navigation" }
                            CardDescription { "Optimized delivery routes with multi-stop planning" }
                        }
                        CardContent {
                            div { class: "dashboard-map",
                                Icon::<LdMapPin> { icon: LdMapPin, width: 48, height: 48 }
                                h3 { "Interactive Route Map" }
                                p { class: "dashboard-muted",
                                    "Google Maps integration with optimized multi-stop routes would be displayed here."
                                }
                                Button { variant: ButtonVariant::Hero,
                                    Icon::<LdNavigation> { icon: LdNavigation, width: 16, height: 16 }
                                    "Open Navigation"
                                }
                            }
                            div { class: "dashboard-button-row",
                                Button { variant: ButtonVariant::Outline,
                                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                    "Export Route PDF"
                                }
                                Button { variant: ButtonVariant::Outline,
                                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 16, height: 16 }
                                    "Send SMS Updates"
                                }
                                Button { variant: ButtonVariant::Outline,
                                    Icon::<LdRoute> { icon: LdRoute, width: 16, height: 16 }
                                    "Optimize Route"
                                }
                            }
                        }
                    }
                }

                TabContent { value: "billing", index: 3usize,
                    div { class: "dashboard-columns",
                        Card {
                            CardHeader {
                                CardTitle { "Today's Earnings" }
                                CardDescription { "Cost split breakdown per vendor" }
                            }
                            CardContent { class: "dashboard-list",
                                for route in routes {
                                    div { key: "{route.id}", class: "dashboard-item",
                                        div { class: "dashboard-item-head",
                                            span { class: "dashboard-item-title", "{route.id}" }
                                            span { class: "dashboard-strong", "{route.earnings}" }
                                        }
                                        for stop in route.vendors.iter() {
                                            div { key: "{stop.name}", class: "dashboard-split-row",
                                                span { class: "dashboard-muted", "{stop.name}" }
                                                span { "{route.per_vendor_share()}" }
                                            }
                                        }
                                    }
                                }
                                Separator {}
                                div { class: "dashboard-split-row dashboard-total",
                                    span { "Total Today" }
                                    span { class: "tone-success", "{catalog::SUPPLIER_TOTAL_TODAY}" }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Payment Summary" }
                                CardDescription { "Weekly earnings and payment status" }
                            }
                            CardContent {
                                MetricList { metrics: catalog::payment_summary() }
                                Button { variant: ButtonVariant::Hero, class: "dashboard-submit",
                                    "Request Payment"
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
fn ScheduleRow(route: DeliveryRoute, on_start: EventHandler<String>) -> Element {
    let id = route.id.clone();
    rsx! {
        div { class: "dashboard-item",
            div { class: "dashboard-item-head",
                div {
                    span { class: "dashboard-item-title", "{route.id}" }
                    Badge { variant: route_badge(route.status), "{route.status.label()}" }
                }
                span { class: "dashboard-strong", "{route.earnings}" }
            }
            p { class: "dashboard-muted", "{route.area} • {route.distance}" }
            p { class: "dashboard-muted", "{route.start_time} - {route.estimated_completion}" }
            div { class: "dashboard-item-foot",
                span { "{route.total_orders} orders from {route.vendors.len()} vendors" }
                if route.can_start() {
                    Button {
                        variant: ButtonVariant::Hero,
                        size: ButtonSize::Small,
                        onclick: move |_| on_start.call(id.clone()),
                        "Start Route"
                    }
                } else {
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View Details" }
                }
            }
        }
    }
}

#[component]
fn RouteStops(route: DeliveryRoute) -> Element {
    let accepts = route.accepts_deliveries();
    rsx! {
        div { class: "dashboard-item",
            div { class: "dashboard-item-head",
                div {
                    h4 { "{route.id} - {route.area}" }
                    p { class: "dashboard-muted",
                        "{route.vendors.len()} vendors • {route.distance} • {route.estimated_time}"
                    }
                }
                Badge { variant: route_badge(route.status), "{route.status.label()}" }
            }
            for stop in route.vendors.iter().cloned() {
                StopRow { key: "{stop.name}", stop, accepts }
            }
        }
    }
}

#[component]
fn StopRow(stop: RouteStop, accepts: bool) -> Element {
    let toast = use_toast();
    let vendor = stop.name.clone();

    let mark_delivered = move |_| {
        tracing::info!(vendor = %vendor, "order marked delivered");
        toast.success(
            "Order Marked as Delivered".to_string(),
            ToastOptions::new().description("Vendor has been notified of successful delivery."),
        );
    };

    rsx! {
        div { class: "dashboard-stop",
            div {
                p {
                    span { class: "dashboard-strong", "{stop.name}" }
                    span { class: "dashboard-muted", " ({stop.order_value})" }
                }
                p { class: "dashboard-muted", "{stop.items}" }
            }
            div { class: "dashboard-icon-actions",
                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "aria-label": "Call vendor",
                    Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                }
                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "aria-label": "Show on map",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                }
                if accepts {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: mark_delivered,
                        "Mark Delivered"
                    }
                }
            }
        }
    }
}
