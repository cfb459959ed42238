//! Copy for the public pages: homepage sections and the contact page.

use crate::display::{Feature, Glyph, Metric, Tone};

/// A homepage "how it works" step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star count, 1 to 5.
    pub rating: u8,
}

/// A way to reach support, with the link the card opens.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Number of FAQ entries shown before "View All FAQs" is pressed.
pub const FAQ_PREVIEW_LEN: usize = 4;

pub fn home_stats() -> Vec<(Metric, Glyph)> {
    vec![
        (metric("Cost Reduction", "40%"), Glyph::TrendingDown),
        (metric("Faster Deliveries", "60%"), Glyph::Clock),
        (metric("Active Vendors", "500+"), Glyph::Users),
        (metric("Daily Orders", "2000+"), Glyph::Package),
    ]
}

pub fn how_it_works() -> Vec<Step> {
    vec![
        Step {
            number: 1,
            title: "Place Your Order",
            description: "Vendors select items, quantities, and delivery preferences",
            glyph: Glyph::Package,
        },
        Step {
            number: 2,
            title: "Smart Grouping",
            description: "Orders are grouped by location and route",
            glyph: Glyph::Users,
        },
        Step {
            number: 3,
            title: "Efficient Delivery",
            description: "Suppliers deliver multiple orders in one optimized trip",
            glyph: Glyph::Truck,
        },
    ]
}

pub fn benefits() -> Vec<Feature> {
    vec![
        Feature {
            title: "Cost Sharing",
            description: "Split delivery costs with other vendors in your area",
            glyph: Glyph::Dollar,
            tone: Tone::Success,
        },
        Feature {
            title: "Route Planning",
            description: "Grouped routes that cover more stops per trip",
            glyph: Glyph::Route,
            tone: Tone::Primary,
        },
        Feature {
            title: "Time Saving",
            description: "Faster deliveries through shared group routes",
            glyph: Glyph::Clock,
            tone: Tone::Warning,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Rajesh Kumar",
            role: "Restaurant Owner",
            content: "GroupDeliver reduced our delivery costs by 40%. Sharing routes with nearby shops just works!",
            rating: 5,
        },
        Testimonial {
            name: "Priya Sharma",
            role: "Grocery Store Owner",
            content: "Fast, reliable, and cost-effective. My customers love the predictable delivery times.",
            rating: 5,
        },
        Testimonial {
            name: "Mohammad Ali",
            role: "Delivery Supplier",
            content: "I can serve more customers efficiently and earn better with grouped routes.",
            rating: 5,
        },
    ]
}

/// Benefits card on the vendor dashboard overview.
pub fn vendor_benefits() -> Vec<Feature> {
    vec![
        Feature {
            title: "Cost Savings",
            description: "Save up to 40% on delivery costs through group orders",
            glyph: Glyph::ShoppingCart,
            tone: Tone::Primary,
        },
        Feature {
            title: "Reliable Delivery",
            description: "Professional suppliers with planned routes",
            glyph: Glyph::Truck,
            tone: Tone::Primary,
        },
        Feature {
            title: "Community Network",
            description: "Connect with local vendors in your area",
            glyph: Glyph::Users,
            tone: Tone::Primary,
        },
    ]
}

pub fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            title: "Email Support",
            description: "Send us an email anytime",
            value: "support@groupdeliver.com",
            href: "mailto:support@groupdeliver.com",
            glyph: Glyph::Mail,
        },
        ContactMethod {
            title: "Phone Support",
            description: "Call us during business hours",
            value: "+91 98765 43210",
            href: "tel:+919876543210",
            glyph: Glyph::Phone,
        },
        ContactMethod {
            title: "WhatsApp Support",
            description: "Quick assistance via WhatsApp",
            value: "+91 98765 43210",
            href: "https://wa.me/919876543210",
            glyph: Glyph::MessageSquare,
        },
        ContactMethod {
            title: "Office Address",
            description: "Visit our headquarters",
            value: "Mumbai, Maharashtra, India",
            href: "#",
            glyph: Glyph::MapPin,
        },
    ]
}

pub fn faq() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "How does group delivery work?",
            answer: "We group orders from nearby vendors onto the same supplier's route, reducing costs for everyone.",
        },
        FaqItem {
            question: "How much can I save on delivery costs?",
            answer: "On average, vendors save 30-50% on delivery costs through our group delivery system.",
        },
        FaqItem {
            question: "How do I track my order?",
            answer: "You can track your order through your vendor dashboard or via SMS notifications.",
        },
        FaqItem {
            question: "What if my delivery is delayed?",
            answer: "You'll receive notifications about any delays. You can also contact our support team for assistance.",
        },
        FaqItem {
            question: "How do I become a supplier?",
            answer: "Sign up on our platform, provide your vehicle details and license information, and complete verification.",
        },
        FaqItem {
            question: "Is there a minimum order value?",
            answer: "No, there's no minimum order value. Larger orders do help fill group deliveries.",
        },
    ]
}

pub fn support_categories() -> Vec<Feature> {
    vec![
        Feature {
            title: "Delivery Issues",
            description: "Problems with orders or deliveries",
            glyph: Glyph::FileText,
            tone: Tone::Primary,
        },
        Feature {
            title: "Missing Items",
            description: "Report missing or damaged items",
            glyph: Glyph::AlertTriangle,
            tone: Tone::Primary,
        },
        Feature {
            title: "Account Help",
            description: "Login, signup, or account issues",
            glyph: Glyph::HelpCircle,
            tone: Tone::Primary,
        },
        Feature {
            title: "General Inquiry",
            description: "Questions about our service",
            glyph: Glyph::MessageSquare,
            tone: Tone::Primary,
        },
    ]
}

/// Support hours listed on the contact page: (channel, hours, glyph).
pub fn business_hours() -> Vec<(&'static str, &'static str, Glyph)> {
    vec![
        ("Customer Support", "24/7 via email and chat", Glyph::Clock),
        ("Phone Support", "Monday - Friday, 9 AM - 6 PM IST", Glyph::Phone),
        ("Live Chat", "Monday - Saturday, 10 AM - 8 PM IST", Glyph::MessageSquare),
    ]
}

fn metric(label: &'static str, value: &'static str) -> Metric {
    Metric {
        label,
        value,
        tone: Tone::Primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = how_it_works().iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn testimonial_ratings_are_in_star_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn faq_preview_is_shorter_than_full_list() {
        assert!(FAQ_PREVIEW_LEN < faq().len());
    }

    #[test]
    fn contact_links_use_matching_schemes() {
        let methods = contact_methods();
        assert!(methods[0].href.starts_with("mailto:"));
        assert!(methods[1].href.starts_with("tel:"));
    }
}
