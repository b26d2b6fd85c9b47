//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lumina_core::{OrderId, OrderStatus, Price};

use crate::collection::Record;

use super::cart::CartItem;

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Name the order was placed under.
    pub customer_name: String,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Grand total including the shipping fee.
    pub total: Price,
    /// Unit count across all cart lines the order was built from.
    pub items: u32,
    /// Snapshot of the cart lines at checkout. Absent on orders imported
    /// from seed data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<CartItem>>,
    /// Free-form delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

impl Record for Order {
    type Key = OrderId;

    fn key(&self) -> OrderId {
        self.id.clone()
    }
}
