//! Core type definitions used across the OrderHub workspace.

pub mod pagination;

pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PagedResult};
