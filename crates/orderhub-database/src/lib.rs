//! # orderhub-database
//!
//! Storage traits for OrderHub entities with PostgreSQL repositories and an
//! in-memory implementation, plus connection and migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::{Database, Stores};
pub use memory::MemoryDatabase;
pub use store::{CustomerStore, OrderFilter, OrderStore};
