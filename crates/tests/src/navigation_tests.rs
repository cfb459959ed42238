use pretty_assertions::assert_eq;
use shared_types::{login_path, shows_marketing_chrome, signup_path, Role, NAV_LINKS};

#[test]
fn dashboards_hide_the_marketing_chrome() {
    for role in Role::ALL {
        assert!(!shows_marketing_chrome(&role.dashboard_path()));
    }
}

#[test]
fn public_pages_show_the_marketing_chrome() {
    for path in ["/", "/contact", "/privacy", "/terms", "/login?role=admin", "/no-such-page"] {
        assert!(shows_marketing_chrome(path), "{path}");
    }
    for (_, path) in NAV_LINKS {
        assert!(shows_marketing_chrome(path), "{path}");
    }
}

#[test]
fn role_links_carry_the_role_query() {
    assert_eq!(signup_path(Role::Supplier), "/signup?role=supplier");
    assert_eq!(login_path(Role::Admin), "/login?role=admin");
    assert_eq!(Role::parse_or_default("supplier"), Role::Supplier);
    assert_eq!(Role::parse_or_default("courier"), Role::Vendor);
}
