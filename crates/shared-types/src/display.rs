//! Presentation descriptors shared by the sample tables and the UI.

/// Accent color of a stat or metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
}

impl Tone {
    /// CSS modifier class, e.g. `tone-success`.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "tone-neutral",
            Tone::Primary => "tone-primary",
            Tone::Success => "tone-success",
            Tone::Warning => "tone-warning",
        }
    }
}

/// Icon slot. The UI maps each glyph to a concrete icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    AlertTriangle,
    Calendar,
    CheckCircle,
    Clock,
    Dollar,
    FileText,
    HelpCircle,
    Mail,
    MapPin,
    MessageSquare,
    Package,
    Phone,
    Route,
    ShoppingCart,
    TrendingDown,
    TrendingUp,
    Truck,
    Users,
}

/// Headline statistic card at the top of a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    /// Month-over-month change, shown on the admin dashboard only.
    pub change: Option<&'static str>,
    pub glyph: Glyph,
    pub tone: Tone,
}

/// Label/value row inside a summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Titled blurb with an icon: benefits, categories, steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_classes_are_prefixed() {
        assert_eq!(Tone::Success.class(), "tone-success");
        assert_eq!(Tone::default().class(), "tone-neutral");
    }
}
