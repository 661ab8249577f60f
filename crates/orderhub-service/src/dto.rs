//! Response shapes returned by services and handlers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderhub_entity::{Customer, Order, OrderStatus};

/// Public view of a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            phone_number: c.phone.clone(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone_number: c.phone,
        }
    }
}

/// Public view of an order. `status` is the numeric status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub order_number: String,
    pub status: OrderStatus,
    pub order_date_utc: DateTime<Utc>,
    pub total_amount: Decimal,
    pub customer_id: Uuid,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            order_number: o.order_number,
            status: o.status,
            order_date_utc: o.order_date_utc,
            total_amount: o.total_amount,
            customer_id: o.customer_id,
        }
    }
}
