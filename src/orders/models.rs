//! Order Domain Models

use crate::cart::models::CartItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status every order is created with. No operation changes it.
pub const PENDING: &str = "pending";

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,

    /// Opaque customer details, stored exactly as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<Value>,

    /// Cart lines as they were when the order was placed.
    pub items: Vec<CartItem>,

    /// Computed once from the snapshots in `items`.
    pub total: f64,

    pub status: String,

    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    #[serde(default)]
    pub customer_info: Option<Value>,

    /// Accepted for compatibility and never stored.
    #[serde(default)]
    pub payment_info: Option<Value>,
}

/// Response of `POST /api/orders`
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub message: &'static str,
    pub order: Order,
}
