//! Order history types.

use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order confirmed and being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The orders tab this status is listed under.
    pub fn tab(&self) -> OrderTab {
        match self {
            OrderStatus::Processing | OrderStatus::Shipped => OrderTab::Active,
            OrderStatus::Delivered => OrderTab::Completed,
            OrderStatus::Cancelled => OrderTab::Cancelled,
        }
    }
}

/// Tabs of the orders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderTab {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl OrderTab {
    pub const ALL: [OrderTab; 3] = [OrderTab::Active, OrderTab::Completed, OrderTab::Cancelled];

    pub fn label(&self) -> &'static str {
        match self {
            OrderTab::Active => "Active",
            OrderTab::Completed => "Completed",
            OrderTab::Cancelled => "Cancelled",
        }
    }

    /// Title and description shown when the tab has no orders.
    pub fn empty_state(&self) -> (&'static str, &'static str) {
        match self {
            OrderTab::Active => (
                "No active orders",
                "You don't have any active orders at the moment.",
            ),
            OrderTab::Completed => (
                "No completed orders",
                "Your completed orders will appear here.",
            ),
            OrderTab::Cancelled => ("No cancelled orders", "You haven't cancelled any orders."),
        }
    }
}

/// A past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Placement date as shown.
    pub date: String,
    pub status: OrderStatus,
    pub total: Money,
    /// Number of items in the order.
    pub items: u32,
    /// Thumbnail of the lead product.
    pub image: String,
    /// Name of the lead product.
    pub product_name: String,
}

impl Order {
    /// "1 item" / "3 items".
    pub fn items_label(&self) -> String {
        if self.items == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.items)
        }
    }
}

/// Orders listed under a tab, in history order.
pub fn orders_in(orders: &[Order], tab: OrderTab) -> Vec<&Order> {
    orders.iter().filter(|o| o.status.tab() == tab).collect()
}
