/// Marketing chrome (navbar, footer) is hidden on any path mentioning
/// `dashboard`, including unknown ones like `/dashboard-old`.
pub fn shows_marketing_chrome(path: &str) -> bool {
    !path.contains("dashboard")
}

/// Public navigation links shown in the top bar: (label, path).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("How It Works", "/#how-it-works"),
    ("Benefits", "/#benefits"),
    ("Contact", "/contact"),
];

/// Path of the signup page with a role preselected.
pub fn signup_path(role: crate::Role) -> String {
    format!("/signup?role={}", role.as_str())
}

/// Path of the login page with a role preselected.
pub fn login_path(role: crate::Role) -> String {
    format!("/login?role={}", role.as_str())
}
