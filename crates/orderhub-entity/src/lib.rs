//! # orderhub-entity
//!
//! Domain entity models for OrderHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod customer;
pub mod order;

pub use customer::Customer;
pub use order::{Order, OrderStatus};
