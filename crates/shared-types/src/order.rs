use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppError, Rupees};

/// Partner shown on orders nobody has picked up yet.
pub const UNASSIGNED_PARTNER: &str = "To be assigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    InTransit,
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InTransit => "in-transit",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// A vendor delivery order as listed on the vendor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: String,
    pub status: OrderStatus,
    /// Vendors sharing the delivery, this vendor included.
    pub group_size: u32,
    pub cost: Rupees,
    pub saved_amount: Rupees,
    pub date: String,
    pub time: String,
    pub delivery_partner: String,
}

impl Order {
    /// Other vendors sharing the delivery.
    pub fn co_vendors(&self) -> u32 {
        self.group_size.saturating_sub(1)
    }

    /// Only pending orders may still be edited or cancelled.
    pub fn is_editable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Order form submission from the "Place Order" tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewOrderRequest {
    #[validate(length(min = 1, message = "Items are required"))]
    pub items: String,
    /// `datetime-local` value, e.g. `2024-01-17T16:00`.
    #[validate(length(min = 1, message = "Delivery time is required"))]
    pub delivery_time: String,
    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub address: String,
    pub notes: String,
}

impl NewOrderRequest {
    fn check(&self) -> Result<(), AppError> {
        let trimmed = NewOrderRequest {
            items: self.items.trim().to_string(),
            delivery_time: self.delivery_time.trim().to_string(),
            address: self.address.trim().to_string(),
            notes: String::new(),
        };
        trimmed
            .validate()
            .map_err(|e| AppError::from(e).with_message("Please fill in all required fields."))
    }
}

/// Format a `datetime-local` input value as a 12-hour clock time.
pub fn format_delivery_time(value: &str) -> Option<String> {
    let parsed = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some(parsed.format("%I:%M %p").to_string().to_lowercase())
}

/// In-memory order list, newest first. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Most recent orders, for the overview's activity card.
    pub fn recent(&self, n: usize) -> &[Order] {
        &self.orders[..n.min(self.orders.len())]
    }

    /// Identifier the next placed order receives.
    pub fn next_id(&self) -> String {
        format!("ORD{:03}", self.orders.len() + 1)
    }

    /// Place an order at the front of the list.
    ///
    /// Cost, savings and group size are display figures drawn from `rng`;
    /// they do not come from any pricing logic.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        request: &NewOrderRequest,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<&Order, AppError> {
        request.check()?;
        let time = format_delivery_time(request.delivery_time.trim()).ok_or_else(|| {
            AppError::bad_request("Please choose a valid delivery time.")
        })?;

        let order = Order {
            id: self.next_id(),
            items: request.items.trim().to_string(),
            status: OrderStatus::Pending,
            group_size: rng.gen_range(2..=5),
            cost: Rupees(rng.gen_range(20..70)),
            saved_amount: Rupees(rng.gen_range(10..40)),
            date: today.format("%Y-%m-%d").to_string(),
            time,
            delivery_partner: UNASSIGNED_PARTNER.to_string(),
        };
        self.orders.insert(0, order);
        Ok(&self.orders[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Confirmed,
    Pending,
}

impl MembershipStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MembershipStatus::Confirmed => "confirmed",
            MembershipStatus::Pending => "pending",
        }
    }
}

/// A vendor grouped into the same delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub items: String,
    pub status: MembershipStatus,
}
