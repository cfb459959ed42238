use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdTruck, LdX};
use dioxus_free_icons::Icon;
use shared_types::NAV_LINKS;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::routes::Route;

/// Top navigation bar for the public pages.
#[component]
pub fn SiteNav() -> Element {
    let mut menu_open = use_signal(|| false);

    let links = rsx! {
        for (label, path) in NAV_LINKS {
            // Section anchors live on the homepage, so they bypass the router.
            if path.contains('#') {
                a { key: "{path}", class: "site-nav-link", href: path,
                    onclick: move |_| menu_open.set(false),
                    "{label}"
                }
            } else {
                Link { key: "{path}", class: "site-nav-link", to: path,
                    onclick: move |_| menu_open.set(false),
                    "{label}"
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_nav.css") }
        nav { class: "site-nav",
            div { class: "site-nav-inner",
                Link { class: "site-nav-brand", to: Route::Home {},
                    span { class: "site-nav-logo",
                        Icon::<LdTruck> { icon: LdTruck, width: 20, height: 20 }
                    }
                    span { "GroupDeliver" }
                }

                div { class: "site-nav-links", {links.clone()} }

                div { class: "site-nav-actions",
                    Link { to: Route::Login { role: None },
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "Login" }
                    }
                    Link { to: Route::Signup { role: None },
                        Button { variant: ButtonVariant::Hero, size: ButtonSize::Small, "Get Started" }
                    }
                }

                button {
                    class: "site-nav-toggle",
                    "aria-label": "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon::<LdX> { icon: LdX, width: 22, height: 22 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                    }
                }
            }

            if menu_open() {
                div { class: "site-nav-mobile",
                    {links}
                    Link { class: "site-nav-link", to: Route::Login { role: None },
                        onclick: move |_| menu_open.set(false),
                        "Login"
                    }
                    Link { class: "site-nav-link", to: Route::Signup { role: None },
                        onclick: move |_| menu_open.set(false),
                        "Get Started"
                    }
                }
            }
        }
    }
}
