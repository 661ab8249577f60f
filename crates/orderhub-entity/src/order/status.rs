//! Order lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use orderhub_core::AppError;

/// Lifecycle status of an order, stored as `SMALLINT` and sent as its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    /// Being assembled, not yet submitted.
    Draft = 0,
    /// Submitted by the customer.
    Placed = 1,
    /// Payment received.
    Paid = 2,
    /// Handed to the carrier.
    Shipped = 3,
    /// Cancelled before shipping.
    Cancelled = 4,
}

impl OrderStatus {
    /// Every status, in code order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Placed,
        Self::Paid,
        Self::Shipped,
        Self::Cancelled,
    ];

    /// Numeric wire/database code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look a status up by its code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| i64::from(s.code()) == code)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Placed => "placed",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code))
            .ok_or_else(|| AppError::validation(format!("Invalid order status code: {code}")))
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code)
                .ok_or_else(|| AppError::validation(format!("Invalid order status code: {code}")));
        }
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "placed" => Ok(Self::Placed),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: draft, placed, paid, shipped, cancelled"
            ))),
        }
    }
}
