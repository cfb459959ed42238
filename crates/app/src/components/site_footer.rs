use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdMapPin, LdPhone, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{Role, NAV_LINKS};

use crate::routes::Route;

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().format("%Y").to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_footer.css") }
        footer { class: "site-footer",
            div { class: "site-footer-grid",
                div { class: "site-footer-brand",
                    div { class: "site-footer-logo",
                        Icon::<LdTruck> { icon: LdTruck, width: 20, height: 20 }
                        span { "GroupDeliver" }
                    }
                    p { "Smarter group deliveries for local vendors and the suppliers who serve them." }
                }

                div {
                    h4 { "Quick Links" }
                    ul {
                        for (label, path) in NAV_LINKS {
                            li { key: "{path}", a { href: path, "{label}" } }
                        }
                    }
                }

                div {
                    h4 { "Get Started" }
                    ul {
                        for role in [Role::Vendor, Role::Supplier] {
                            li { key: "{role}",
                                Link { to: Route::signup(role),
                                    "{role.signup_title()}"
                                }
                            }
                        }
                        li {
                            Link { to: Route::Login { role: None }, "Login" }
                        }
                    }
                }

                div {
                    h4 { "Contact" }
                    ul { class: "site-footer-contact",
                        li {
                            Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                            "support@groupdeliver.com"
                        }
                        li {
                            Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                            "+91 98765 43210"
                        }
                        li {
                            Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                            "Sector 15, Gurugram, Haryana"
                        }
                    }
                }
            }

            div { class: "site-footer-bottom",
                p { "© {year} GroupDeliver. All rights reserved." }
                div { class: "site-footer-legal",
                    Link { to: Route::Privacy {}, "Privacy Policy" }
                    Link { to: Route::Terms {}, "Terms of Service" }
                }
            }
        }
    }
}
