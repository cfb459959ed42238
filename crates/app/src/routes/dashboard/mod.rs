mod admin;
mod supplier;
mod vendor;

pub use admin::AdminDashboard;
pub use supplier::SupplierDashboard;
pub use vendor::VendorDashboard;

use shared_types::{MembershipStatus, OrderStatus, RouteStatus};
use shared_ui::BadgeVariant;

fn order_badge(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Delivered => BadgeVariant::Success,
        OrderStatus::InTransit => BadgeVariant::Warning,
        OrderStatus::Pending => BadgeVariant::Outline,
    }
}

fn route_badge(status: RouteStatus) -> BadgeVariant {
    match status {
        RouteStatus::Completed => BadgeVariant::Success,
        RouteStatus::InProgress => BadgeVariant::Warning,
        RouteStatus::Pending => BadgeVariant::Outline,
    }
}

fn member_badge(status: MembershipStatus) -> BadgeVariant {
    match status {
        MembershipStatus::Confirmed => BadgeVariant::Success,
        MembershipStatus::Pending => BadgeVariant::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finished_work_is_shown_as_success() {
        assert_eq!(order_badge(OrderStatus::Delivered), BadgeVariant::Success);
        assert_eq!(route_badge(RouteStatus::Completed), BadgeVariant::Success);
        assert_eq!(member_badge(MembershipStatus::Confirmed), BadgeVariant::Success);
    }

    #[test]
    fn waiting_work_is_not_highlighted() {
        assert_eq!(order_badge(OrderStatus::Pending), BadgeVariant::Outline);
        assert_eq!(route_badge(RouteStatus::Pending), BadgeVariant::Outline);
        assert_eq!(member_badge(MembershipStatus::Pending), BadgeVariant::Secondary);
    }
}
