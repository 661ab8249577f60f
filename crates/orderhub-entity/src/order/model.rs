//! Order entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::OrderStatus;

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Human-facing unique number, e.g. `ORD-000123`.
    pub order_number: String,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed; the primary sort key for listings.
    pub order_date_utc: DateTime<Utc>,
    /// Order total, two decimal places.
    pub total_amount: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    pub deleted_at_utc: Option<DateTime<Utc>>,
    pub created_at_utc: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at_utc: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl Order {
    /// Build a new, active order.
    pub fn new(
        order_number: impl Into<String>,
        customer_id: Uuid,
        status: OrderStatus,
        order_date_utc: DateTime<Utc>,
        total_amount: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number: order_number.into(),
            customer_id,
            status,
            order_date_utc,
            total_amount: total_amount.round_dp(2),
            notes: None,
            is_deleted: false,
            deleted_at_utc: None,
            created_at_utc: Utc::now(),
            created_by: None,
            updated_at_utc: None,
            updated_by: None,
        }
    }
}
