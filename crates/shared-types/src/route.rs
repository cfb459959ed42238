use serde::{Deserialize, Serialize};

use crate::Rupees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    Pending,
    InProgress,
    Completed,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Pending => "pending",
            RouteStatus::InProgress => "in-progress",
            RouteStatus::Completed => "completed",
        }
    }
}

/// One vendor drop on a supplier's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub name: String,
    pub items: String,
    pub order_value: Rupees,
}

/// A supplier's multi-stop delivery run for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    pub id: String,
    pub area: String,
    pub vendors: Vec<RouteStop>,
    pub total_orders: u32,
    pub estimated_time: String,
    pub distance: String,
    pub earnings: Rupees,
    pub status: RouteStatus,
    pub start_time: String,
    pub estimated_completion: String,
}

impl DeliveryRoute {
    /// Earnings split evenly across stops, rounded to the nearest rupee.
    pub fn per_vendor_share(&self) -> Rupees {
        let stops = self.vendors.len() as u32;
        if stops == 0 {
            return Rupees(0);
        }
        Rupees((self.earnings.value() + stops / 2) / stops)
    }

    /// Pending routes can be started; others only offer details.
    pub fn can_start(&self) -> bool {
        self.status == RouteStatus::Pending
    }

    /// Stops can be marked delivered while the route is running.
    pub fn accepts_deliveries(&self) -> bool {
        self.status == RouteStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn share_rounds_to_nearest_rupee() {
        let routes = catalog::supplier_routes();
        // 280 / 3 = 93.33
        assert_eq!(routes[0].per_vendor_share(), Rupees(93));
        // 220 / 2 = 110
        assert_eq!(routes[1].per_vendor_share(), Rupees(110));
    }

    #[test]
    fn share_of_empty_route_is_zero() {
        let mut route = catalog::supplier_routes().remove(0);
        route.vendors.clear();
        assert_eq!(route.per_vendor_share(), Rupees(0));
    }

    #[test]
    fn actions_follow_status() {
        let routes = catalog::supplier_routes();
        assert!(routes[0].accepts_deliveries());
        assert!(!routes[0].can_start());
        assert!(routes[1].can_start());
        assert!(!routes[1].accepts_deliveries());
    }
}
