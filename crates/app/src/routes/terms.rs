use dioxus::prelude::*;

/// Terms of Service page.
#[component]
pub fn Terms() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./legal.css") }

        div { class: "legal-page",
            div { class: "legal-container",
                div { class: "legal-header",
                    h1 { class: "legal-title", "Terms of Service" }
                    p { class: "legal-updated", "Last updated: January 17, 2024" }
                }

                section { class: "legal-section",
                    h2 { "Acceptance of Terms" }
                    p { "By accessing and using GroupDeliver, you accept and agree to be bound by the terms and provision of this agreement." }
                }

                section { class: "legal-section",
                    h2 { "Platform Description" }
                    p { "GroupDeliver is a platform that connects vendors and suppliers for efficient group delivery services. Our service includes:" }
                    ul {
                        li { "Order grouping and route optimization" }
                        li { "Delivery coordination between vendors and suppliers" }
                        li { "Cost-sharing mechanisms for deliveries" }
                        li { "Real-time tracking and notifications" }
                    }
                }

                section { class: "legal-section",
                    h2 { "User Responsibilities" }
                    p { "As a user of our platform, you agree to:" }
                    ul {
                        li { "Provide accurate and complete information" }
                        li { "Maintain the confidentiality of your account" }
                        li { "Use the service in compliance with applicable laws" }
                        li { "Respect other users and suppliers" }
                        li { "Pay for services as agreed" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Vendor Terms" }
                    p { "Vendors using our platform agree to:" }
                    ul {
                        li { "Provide accurate order information and delivery addresses" }
                        li { "Be available to receive deliveries at scheduled times" }
                        li { "Pay delivery fees as calculated by our system" }
                        li { "Report any issues promptly" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Supplier Terms" }
                    p { "Suppliers using our platform agree to:" }
                    ul {
                        li { "Maintain valid licenses and insurance" }
                        li { "Follow assigned routes and delivery schedules" }
                        li { "Handle items with care and professionalism" }
                        li { "Communicate delays or issues promptly" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Limitation of Liability" }
                    p { "GroupDeliver shall not be liable for:" }
                    ul {
                        li { "Delays caused by external factors" }
                        li { "Damage to items during transit (unless due to negligence)" }
                        li { "Indirect or consequential damages" }
                        li { "Actions of third-party service providers" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Termination" }
                    p { "We reserve the right to terminate or suspend accounts that violate these terms or engage in fraudulent activity." }
                }

                section { class: "legal-section",
                    h2 { "Changes to Terms" }
                    p { "We reserve the right to modify these terms at any time. Users will be notified of significant changes via email or platform notifications." }
                }

                section { class: "legal-section",
                    h2 { "Contact Information" }
                    p { "For questions about these Terms of Service, contact us at:" }
                    p {
                        "Email: "
                        a { href: "mailto:legal@groupdeliver.com", "legal@groupdeliver.com" }
                        br {}
                        "Phone: +91 98765 43210"
                    }
                }
            }
        }
    }
}
