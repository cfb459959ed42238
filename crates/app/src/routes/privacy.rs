use dioxus::prelude::*;

/// Privacy Policy page.
#[component]
pub fn Privacy() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./legal.css") }

        div { class: "legal-page",
            div { class: "legal-container",
                div { class: "legal-header",
                    h1 { class: "legal-title", "Privacy Policy" }
                    p { class: "legal-updated", "Last updated: January 17, 2024" }
                }

                section { class: "legal-section",
                    h2 { "Information We Collect" }
                    p { "We collect information you provide directly to us, such as when you create an account, make a purchase, or contact us for support." }
                    ul {
                        li { "Personal information (name, email address, phone number)" }
                        li { "Business information (company name, address, type of business)" }
                        li { "Transaction data and order history" }
                        li { "Communication preferences" }
                    }
                }

                section { class: "legal-section",
                    h2 { "How We Use Your Information" }
                    p { "We use the information we collect to:" }
                    ul {
                        li { "Provide, maintain, and improve our services" }
                        li { "Process transactions and send related information" }
                        li { "Send technical notices, updates, and support messages" }
                        li { "Respond to your comments, questions, and customer service requests" }
                        li { "Optimize delivery routes and group orders efficiently" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Information Sharing and Disclosure" }
                    p { "We may share your information in the following circumstances:" }
                    ul {
                        li { "With vendors and suppliers to facilitate deliveries" }
                        li { "With service providers who assist in our operations" }
                        li { "When required by law or to protect rights and safety" }
                        li { "In connection with a merger, sale, or asset transfer" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Data Security" }
                    p { "We implement appropriate security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction." }
                }

                section { class: "legal-section",
                    h2 { "Your Rights" }
                    p { "You have the right to:" }
                    ul {
                        li { "Access and update your personal information" }
                        li { "Delete your account and associated data" }
                        li { "Opt out of marketing communications" }
                        li { "Request a copy of your data" }
                    }
                }

                section { class: "legal-section",
                    h2 { "Contact Us" }
                    p { "If you have any questions about this Privacy Policy, please contact us at:" }
                    p {
                        "Email: "
                        a { href: "mailto:privacy@groupdeliver.com", "privacy@groupdeliver.com" }
                        br {}
                        "Phone: +91 98765 43210"
                    }
                }
            }
        }
    }
}
