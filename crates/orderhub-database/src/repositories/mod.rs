//! Postgres repository implementations for OrderHub entities.

pub mod customer;
pub mod order;

pub use customer::CustomerRepository;
pub use order::OrderRepository;

use orderhub_core::error::{AppError, ErrorKind};

/// Map a failed write, turning constraint violations into conflicts.
pub(crate) fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let message = match db.constraint() {
                Some("uq_customers_email") => "A customer with this email already exists",
                Some("uq_customers_customer_number") => "Customer number is already in use",
                Some("uq_orders_order_number") => "Order number is already in use",
                _ => "A record with the same key already exists",
            };
            return AppError::with_source(ErrorKind::Conflict, message, err);
        }
        if db.is_foreign_key_violation() {
            return AppError::with_source(ErrorKind::Conflict, "Referenced customer does not exist", err);
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
