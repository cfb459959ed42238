pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod privacy;
pub mod signup;
pub mod terms;

use dioxus::prelude::*;
use shared_types::{shows_marketing_chrome, Role};

use crate::components::{Assistant, SiteFooter, SiteNav};

use contact::Contact;
use dashboard::{AdminDashboard, SupplierDashboard, VendorDashboard};
use home::Home;
use login::Login;
use not_found::NotFound;
use privacy::Privacy;
use signup::Signup;
use terms::Terms;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/login?:role")]
    Login { role: Option<String> },
    #[route("/signup?:role")]
    Signup { role: Option<String> },
    #[route("/vendor-dashboard")]
    VendorDashboard {},
    #[route("/supplier-dashboard")]
    SupplierDashboard {},
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/contact")]
    Contact {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Dashboard a signed-in user of `role` lands on.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Vendor => Route::VendorDashboard {},
            Role::Supplier => Route::SupplierDashboard {},
            Role::Admin => Route::AdminDashboard {},
        }
    }

    pub fn login(role: Role) -> Self {
        Route::Login {
            role: Some(role.as_str().to_string()),
        }
    }

    pub fn signup(role: Role) -> Self {
        Route::Signup {
            role: Some(role.as_str().to_string()),
        }
    }
}

/// Site shell: public pages get the navbar and footer, dashboards render bare.
/// The assistant is mounted everywhere.
#[component]
fn SiteLayout() -> Element {
    let route: Route = use_route();
    let chrome = shows_marketing_chrome(&route.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "site-shell",
            if chrome {
                SiteNav {}
            }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            if chrome {
                SiteFooter {}
            }
            Assistant {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{login_path, signup_path};
    use std::str::FromStr;

    #[test]
    fn dashboard_routes_match_role_paths() {
        for role in Role::ALL {
            let route = Route::dashboard(role);
            assert_eq!(route.to_string(), role.dashboard_path());
            assert_eq!(Route::from_str(&role.dashboard_path()).unwrap(), route);
            assert!(!shows_marketing_chrome(&route.to_string()));
        }
    }

    #[test]
    fn role_query_is_parsed() {
        let route = Route::from_str("/login?role=supplier").unwrap();
        assert_eq!(route, Route::login(Role::Supplier));
        let route = Route::from_str(&signup_path(Role::Admin)).unwrap();
        assert_eq!(route, Route::signup(Role::Admin));
        assert_eq!(Route::from_str(&login_path(Role::Vendor)).unwrap(), Route::login(Role::Vendor));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::from_str("/does/not/exist").unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["does".into(), "not".into(), "exist".into()]
            }
        );
        assert!(shows_marketing_chrome(&route.to_string()));
    }
}
