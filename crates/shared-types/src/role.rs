use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform role chosen on the login and signup tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Vendor,
    Supplier,
    Admin,
}

impl Role {
    /// Tab order on the auth pages.
    pub const ALL: [Role; 3] = [Role::Vendor, Role::Supplier, Role::Admin];

    /// Parse a `?role=` query value. Unknown or empty values select Vendor.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "supplier" => Role::Supplier,
            "admin" => Role::Admin,
            _ => Role::Vendor,
        }
    }

    /// Lowercase key used in storage, query strings and tab values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vendor => "vendor",
            Role::Supplier => "supplier",
            Role::Admin => "admin",
        }
    }

    /// Capitalized label for tab triggers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Vendor => "Vendor",
            Role::Supplier => "Supplier",
            Role::Admin => "Admin",
        }
    }

    /// Path of this role's dashboard, e.g. `/vendor-dashboard`.
    pub fn dashboard_path(&self) -> String {
        format!("/{}-dashboard", self.as_str())
    }

    /// Display name written to the session on login, where no name is typed.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            Role::Vendor => "John Vendor",
            Role::Supplier => "Jane Supplier",
            Role::Admin => "Admin User",
        }
    }

    pub fn login_title(&self) -> &'static str {
        match self {
            Role::Vendor => "Vendor Login",
            Role::Supplier => "Supplier Login",
            Role::Admin => "Admin Login",
        }
    }

    pub fn login_description(&self) -> &'static str {
        match self {
            Role::Vendor => "Access your vendor dashboard to place orders and track deliveries",
            Role::Supplier => "Manage delivery routes and fulfill vendor orders efficiently",
            Role::Admin => "Access the admin panel to monitor and manage the platform",
        }
    }

    pub fn signup_title(&self) -> &'static str {
        match self {
            Role::Vendor => "Join as Vendor",
            Role::Supplier => "Join as Supplier",
            Role::Admin => "Admin Registration",
        }
    }

    pub fn signup_description(&self) -> &'static str {
        match self {
            Role::Vendor => "Start placing orders and benefit from group delivery savings",
            Role::Supplier => "Provide delivery services and earn from optimized routes",
            Role::Admin => "Administrative access to manage the platform",
        }
    }

    /// Label of the business name field on signup step two.
    pub fn business_name_label(&self) -> &'static str {
        match self {
            Role::Vendor => "Business/Store Name",
            Role::Supplier | Role::Admin => "Company Name",
        }
    }

    /// Suppliers must also give vehicle and licence details.
    pub fn requires_vehicle_details(&self) -> bool {
        matches!(self, Role::Supplier)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::parse_or_default("vendor"), Role::Vendor);
        assert_eq!(Role::parse_or_default("supplier"), Role::Supplier);
        assert_eq!(Role::parse_or_default("Admin"), Role::Admin);
    }

    #[test]
    fn parse_unknown_or_empty_falls_back_to_vendor() {
        assert_eq!(Role::parse_or_default(""), Role::Vendor);
        assert_eq!(Role::parse_or_default("courier"), Role::Vendor);
    }

    #[test]
    fn dashboard_paths_match_routes() {
        assert_eq!(Role::Vendor.dashboard_path(), "/vendor-dashboard");
        assert_eq!(Role::Supplier.dashboard_path(), "/supplier-dashboard");
        assert_eq!(Role::Admin.dashboard_path(), "/admin-dashboard");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Supplier).unwrap(), "\"supplier\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn only_suppliers_need_vehicle_details() {
        assert!(Role::Supplier.requires_vehicle_details());
        assert!(!Role::Vendor.requires_vehicle_details());
        assert!(!Role::Admin.requires_vehicle_details());
    }

    #[test]
    fn all_roles_in_tab_order() {
        let keys: Vec<_> = Role::ALL.iter().map(Role::as_str).collect();
        assert_eq!(keys, ["vendor", "supplier", "admin"]);
    }
}
