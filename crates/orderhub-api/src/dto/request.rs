//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orderhub_core::types::DEFAULT_PAGE_SIZE;
use orderhub_service::validation::not_blank;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Invalid email format")
    )]
    #[serde(default)]
    pub email: String,
    /// Plain-text password.
    #[validate(
        custom(function = "not_blank", message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    #[serde(default)]
    pub password: String,
}

/// Query string of `GET /api/customers/{customerId}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQueryParams {
    /// Numeric order status code.
    pub status: Option<u8>,
    /// Inclusive lower bound.
    pub from_utc: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub to_utc: Option<DateTime<Utc>>,
    #[serde(default = "default_page_number")]
    pub page_number: i32,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_number() -> i32 {
    1
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE as i32
}

impl OrdersQueryParams {
    /// Puts `from_utc`/`to_utc` in order when both are given reversed.
    /// Returns whether a swap happened.
    pub fn normalize_date_range(&mut self) -> bool {
        match (self.from_utc, self.to_utc) {
            (Some(from), Some(to)) if from > to => {
                self.from_utc = Some(to);
                self.to_utc = Some(from);
                true
            }
            _ => false,
        }
    }
}
