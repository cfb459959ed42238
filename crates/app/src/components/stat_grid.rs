use dioxus::prelude::*;
use shared_types::{Metric, StatCard};
use shared_ui::{Card, CardContent};

use super::GlyphIcon;

/// Row of headline stat cards at the top of a dashboard.
#[component]
pub fn StatGrid(stats: Vec<StatCard>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./stat_grid.css") }
        div { class: "stat-grid",
            for stat in stats {
                Card { key: "{stat.label}", hoverable: true,
                    CardContent { class: "stat-card",
                        div { class: "stat-card-text",
                            p { class: "stat-card-label", "{stat.label}" }
                            p { class: "stat-card-value", "{stat.value}" }
                            if let Some(change) = stat.change {
                                p { class: "stat-card-change", "{change} from last month" }
                            }
                        }
                        div { class: "stat-card-icon {stat.tone.class()}",
                            GlyphIcon { glyph: stat.glyph, size: 24 }
                        }
                    }
                }
            }
        }
    }
}

/// Label/value rows inside a summary card.
#[component]
pub fn MetricList(metrics: Vec<Metric>) -> Element {
    rsx! {
        div { class: "metric-list",
            for metric in metrics {
                div { key: "{metric.label}", class: "metric-row",
                    span { class: "metric-label", "{metric.label}" }
                    span { class: "metric-value {metric.tone.class()}", "{metric.value}" }
                }
            }
        }
    }
}
