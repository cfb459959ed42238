use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdStar, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{marketing, Glyph, Role};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent};

use crate::components::GlyphIcon;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            Hero {}
            HowItWorks {}
            Benefits {}
            Testimonials {}
            CallToAction {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "home-hero",
            div { class: "home-container home-hero-grid",
                div { class: "home-hero-copy",
                    Badge { variant: BadgeVariant::Secondary, "Smart Group Delivery Platform" }
                    h1 { class: "home-hero-title",
                        "Revolutionize Your "
                        span { class: "home-gradient-text", "Delivery" }
                        " Experience"
                    }
                    p { class: "home-hero-lead",
                        "Join thousands of vendors and suppliers using smart grouping to reduce costs, save time, and optimize delivery routes."
                    }
                    div { class: "home-hero-actions",
                        Link { to: Route::signup(Role::Vendor),
                            Button { variant: ButtonVariant::Hero, size: ButtonSize::Large,
                                "Join as Vendor"
                                Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                            }
                        }
                        Link { to: Route::signup(Role::Supplier),
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, "Join as Supplier" }
                        }
                    }
                    div { class: "home-stats",
                        for (stat, glyph) in marketing::home_stats() {
                            div { key: "{stat.label}", class: "home-stat",
                                div { class: "home-stat-icon", GlyphIcon { glyph, size: 22 } }
                                div { class: "home-stat-value", "{stat.value}" }
                                div { class: "home-stat-label", "{stat.label}" }
                            }
                        }
                    }
                }

                div { class: "home-hero-visual",
                    div { class: "home-hero-art",
                        Icon::<LdTruck> { icon: LdTruck, width: 120, height: 120 }
                    }
                    div { class: "home-hero-float",
                        div { class: "home-hero-float-icon", GlyphIcon { glyph: Glyph::CheckCircle, size: 20 } }
                        div {
                            div { class: "home-hero-float-title", "Order Delivered" }
                            div { class: "home-hero-float-sub", "Route optimized • Cost shared" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HowItWorks() -> Element {
    rsx! {
        section { id: "how-it-works", class: "home-section",
            div { class: "home-container",
                div { class: "home-section-heading",
                    h2 { "How It Works" }
                    p { "Simple, efficient, and smart. Get started in three easy steps." }
                }
                div { class: "home-card-grid",
                    for step in marketing::how_it_works() {
                        Card { key: "{step.number}", hoverable: true,
                            CardContent { class: "home-step",
                                div { class: "home-step-art",
                                    GlyphIcon { glyph: step.glyph, size: 40 }
                                    span { class: "home-step-number", "{step.number}" }
                                }
                                h3 { "{step.title}" }
                                p { "{step.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Benefits() -> Element {
    rsx! {
        section { id: "benefits", class: "home-section home-section-muted",
            div { class: "home-container",
                div { class: "home-section-heading",
                    h2 { "Why Choose GroupDeliver?" }
                    p { "Experience the benefits of smart group delivery technology." }
                }
                div { class: "home-card-grid",
                    for benefit in marketing::benefits() {
                        Card { key: "{benefit.title}", hoverable: true,
                            CardContent { class: "home-benefit",
                                div { class: "home-benefit-icon {benefit.tone.class()}",
                                    GlyphIcon { glyph: benefit.glyph, size: 32 }
                                }
                                h3 { "{benefit.title}" }
                                p { "{benefit.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    rsx! {
        section { class: "home-section",
            div { class: "home-container",
                div { class: "home-section-heading",
                    h2 { "What Our Users Say" }
                    p { "Join thousands of satisfied vendors and suppliers." }
                }
                div { class: "home-card-grid",
                    for testimonial in marketing::testimonials() {
                        Card { key: "{testimonial.name}",
                            CardContent { class: "home-testimonial",
                                div { class: "home-stars",
                                    for i in 0..testimonial.rating {
                                        span { key: "{i}",
                                            Icon::<LdStar> { icon: LdStar, width: 16, height: 16, fill: "currentColor" }
                                        }
                                    }
                                }
                                p { class: "home-quote", "\"{testimonial.content}\"" }
                                div { class: "home-author", "{testimonial.name}" }
                                div { class: "home-author-role", "{testimonial.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    rsx! {
        section { class: "home-cta",
            div { class: "home-container home-cta-inner",
                h2 { "Ready to Transform Your Delivery Experience?" }
                p { "Join GroupDeliver today and start saving on delivery costs while improving efficiency." }
                div { class: "home-hero-actions",
                    Link { to: Route::signup(Role::Vendor),
                        Button { variant: ButtonVariant::Secondary, size: ButtonSize::Large,
                            "Get Started as Vendor"
                            Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                        }
                    }
                    Link { to: Route::signup(Role::Supplier),
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, "Join as Supplier" }
                    }
                }
            }
        }
    }
}
