//! Sample dashboard data. Every figure here is a presentation constant;
//! nothing is computed from orders or routes.

use crate::display::{Glyph, Metric, StatCard, Tone};
use crate::{
    DeliveryRoute, GroupMember, MembershipStatus, Order, OrderStatus, RouteStatus, RouteStop,
    Rupees, UNASSIGNED_PARTNER,
};

// ── Vendor ──────────────────────────────────────────────

pub fn vendor_stats() -> Vec<StatCard> {
    vec![
        stat("Today's Orders", "3", Glyph::Package, Tone::Primary),
        stat("In Transit", "2", Glyph::Truck, Tone::Warning),
        stat("Delivered", "15", Glyph::CheckCircle, Tone::Success),
        stat("Cost Saved", "₹240", Glyph::Calendar, Tone::Primary),
    ]
}

/// Orders the vendor dashboard starts with on every render.
pub fn vendor_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".into(),
            items: "Rice 5kg, Dal 2kg, Oil 1L".into(),
            status: OrderStatus::Delivered,
            group_size: 4,
            cost: Rupees(45),
            saved_amount: Rupees(30),
            date: "2024-01-15".into(),
            time: "14:30".into(),
            delivery_partner: "Rajesh Kumar".into(),
        },
        Order {
            id: "ORD002".into(),
            items: "Vegetables Mix, Fruits".into(),
            status: OrderStatus::InTransit,
            group_size: 3,
            cost: Rupees(35),
            saved_amount: Rupees(20),
            date: "2024-01-16".into(),
            time: "11:00".into(),
            delivery_partner: "Priya Sharma".into(),
        },
        Order {
            id: "ORD003".into(),
            items: "Snacks, Beverages".into(),
            status: OrderStatus::Pending,
            group_size: 5,
            cost: Rupees(28),
            saved_amount: Rupees(35),
            date: "2024-01-17".into(),
            time: "16:00".into(),
            delivery_partner: UNASSIGNED_PARTNER.into(),
        },
    ]
}

/// Today's shared drop shown on the vendor "Group Details" tab.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDelivery {
    pub order_id: &'static str,
    pub drop_location: &'static str,
    pub expected_arrival: &'static str,
    pub members: Vec<GroupMember>,
}

pub fn todays_group() -> GroupDelivery {
    GroupDelivery {
        order_id: "ORD002",
        drop_location: "Central Market, Sector 15",
        expected_arrival: "2:30 PM - 3:00 PM",
        members: vec![
            member("Fresh Mart", "Vegetables, Fruits", MembershipStatus::Confirmed),
            member("Daily Needs Store", "Groceries", MembershipStatus::Confirmed),
            member("Quick Bites", "Snacks", MembershipStatus::Pending),
        ],
    }
}

// ── Supplier ────────────────────────────────────────────

pub fn supplier_stats() -> Vec<StatCard> {
    vec![
        stat("Today's Routes", "3", Glyph::Route, Tone::Primary),
        stat("Total Orders", "12", Glyph::Package, Tone::Warning),
        stat("Earnings Today", "₹850", Glyph::Dollar, Tone::Success),
        stat("Completed", "8", Glyph::CheckCircle, Tone::Success),
    ]
}

pub fn supplier_routes() -> Vec<DeliveryRoute> {
    vec![
        DeliveryRoute {
            id: "RT001".into(),
            area: "Sector 15-18".into(),
            vendors: vec![
                stop("Fresh Mart", "Vegetables, Fruits", 450),
                stop("Daily Needs", "Groceries", 320),
                stop("Quick Bites", "Snacks", 180),
            ],
            total_orders: 3,
            estimated_time: "2 hours".into(),
            distance: "15 km".into(),
            earnings: Rupees(280),
            status: RouteStatus::InProgress,
            start_time: "10:00 AM".into(),
            estimated_completion: "12:30 PM".into(),
        },
        DeliveryRoute {
            id: "RT002".into(),
            area: "Sector 20-22".into(),
            vendors: vec![
                stop("Green Grocer", "Organic Vegetables", 600),
                stop("Corner Store", "Daily Essentials", 290),
            ],
            total_orders: 2,
            estimated_time: "1.5 hours".into(),
            distance: "12 km".into(),
            earnings: Rupees(220),
            status: RouteStatus::Pending,
            start_time: "2:00 PM".into(),
            estimated_completion: "3:30 PM".into(),
        },
    ]
}

/// Day total shown under the per-route billing split.
pub const SUPPLIER_TOTAL_TODAY: &str = "₹850";

pub fn supplier_performance() -> Vec<Metric> {
    vec![
        metric("On-time Delivery Rate", "94%", Tone::Success),
        metric("Customer Rating", "4.8/5.0", Tone::Neutral),
        metric("Routes Completed", "15", Tone::Neutral),
        metric("Total Earnings", "₹4,200", Tone::Success),
    ]
}

pub fn payment_summary() -> Vec<Metric> {
    vec![
        metric("This Week", "₹4,200", Tone::Neutral),
        metric("Last Week", "₹3,850", Tone::Neutral),
        metric("Pending Payment", "₹1,200", Tone::Warning),
    ]
}

// ── Admin ───────────────────────────────────────────────

pub fn admin_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            change: Some("+12%"),
            ..stat("Total Orders", "1,247", Glyph::Package, Tone::Primary)
        },
        StatCard {
            change: Some("+8%"),
            ..stat("Active Vendors", "342", Glyph::Users, Tone::Success)
        },
        StatCard {
            change: Some("+15%"),
            ..stat("Active Suppliers", "89", Glyph::Truck, Tone::Warning)
        },
        StatCard {
            change: Some("+23%"),
            ..stat("Revenue", "₹2.4L", Glyph::Dollar, Tone::Success)
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Info,
    Success,
    Warning,
}

impl ActivityLevel {
    pub fn tone(&self) -> Tone {
        match self {
            ActivityLevel::Info => Tone::Primary,
            ActivityLevel::Success => Tone::Success,
            ActivityLevel::Warning => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub message: &'static str,
    pub time: &'static str,
    pub level: ActivityLevel,
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            message: "New order placed by Fresh Mart",
            time: "2 mins ago",
            level: ActivityLevel::Info,
        },
        Activity {
            message: "Route RT001 completed successfully",
            time: "15 mins ago",
            level: ActivityLevel::Success,
        },
        Activity {
            message: "New supplier registered: Quick Logistics",
            time: "1 hour ago",
            level: ActivityLevel::Info,
        },
        Activity {
            message: "Delivery delay reported for Sector 18",
            time: "2 hours ago",
            level: ActivityLevel::Warning,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopVendor {
    pub name: &'static str,
    pub orders: u32,
    pub savings: Rupees,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopSupplier {
    pub name: &'static str,
    pub deliveries: u32,
    pub rating: f32,
}

pub fn top_vendors() -> Vec<TopVendor> {
    vec![
        TopVendor { name: "Fresh Mart", orders: 45, savings: Rupees(1200) },
        TopVendor { name: "Daily Needs Store", orders: 38, savings: Rupees(980) },
        TopVendor { name: "Green Grocer", orders: 32, savings: Rupees(850) },
    ]
}

pub fn top_suppliers() -> Vec<TopSupplier> {
    vec![
        TopSupplier { name: "Rajesh Kumar", deliveries: 28, rating: 4.9 },
        TopSupplier { name: "Priya Logistics", deliveries: 24, rating: 4.8 },
        TopSupplier { name: "Quick Transport", deliveries: 20, rating: 4.7 },
    ]
}

/// Per-area route efficiency row. The percentages are fixed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEfficiency {
    pub area: &'static str,
    pub orders: u32,
    pub efficiency: &'static str,
    pub savings: Rupees,
}

pub fn area_efficiency() -> Vec<AreaEfficiency> {
    vec![
        AreaEfficiency { area: "Sector 15-18", orders: 12, efficiency: "94%", savings: Rupees(340) },
        AreaEfficiency { area: "Sector 20-22", orders: 8, efficiency: "89%", savings: Rupees(220) },
        AreaEfficiency { area: "Central Market", orders: 15, efficiency: "97%", savings: Rupees(450) },
    ]
}

pub const OVERALL_EFFICIENCY: &str = "93%";
pub const ROUTE_SAVINGS_TODAY: &str = "₹1,010";

pub fn user_counts() -> Vec<StatCard> {
    vec![
        stat("Total Vendors", "342", Glyph::Users, Tone::Primary),
        stat("Total Suppliers", "89", Glyph::Truck, Tone::Success),
        stat("Flagged Accounts", "3", Glyph::AlertTriangle, Tone::Warning),
    ]
}

pub fn platform_analytics() -> Vec<Metric> {
    vec![
        metric("Daily Active Users", "245", Tone::Neutral),
        metric("Route Efficiency", "93%", Tone::Neutral),
        metric("Cost Savings", "₹12.4K", Tone::Neutral),
        metric("User Satisfaction", "4.7/5", Tone::Neutral),
    ]
}

fn stat(label: &'static str, value: &'static str, glyph: Glyph, tone: Tone) -> StatCard {
    StatCard {
        label,
        value,
        change: None,
        glyph,
        tone,
    }
}

fn metric(label: &'static str, value: &'static str, tone: Tone) -> Metric {
    Metric { label, value, tone }
}

fn member(name: &str, items: &str, status: MembershipStatus) -> GroupMember {
    GroupMember {
        name: name.into(),
        items: items.into(),
        status,
    }
}

fn stop(name: &str, items: &str, order_value: u32) -> RouteStop {
    RouteStop {
        name: name.into(),
        items: items.into(),
        order_value: Rupees(order_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dashboard_has_four_stat_cards() {
        assert_eq!(vendor_stats().len(), 4);
        assert_eq!(supplier_stats().len(), 4);
        assert_eq!(admin_stats().len(), 4);
    }

    #[test]
    fn only_admin_stats_carry_changes() {
        assert!(admin_stats().iter().all(|s| s.change.is_some()));
        assert!(vendor_stats().iter().all(|s| s.change.is_none()));
    }

    #[test]
    fn vendor_orders_are_unique_and_sequential() {
        let ids: Vec<_> = vendor_orders().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, ["ORD001", "ORD002", "ORD003"]);
    }

    #[test]
    fn route_order_counts_match_stops() {
        for route in supplier_routes() {
            assert_eq!(route.total_orders as usize, route.vendors.len());
        }
    }
}
