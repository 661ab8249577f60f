//! # orderhub-core
//!
//! Core crate for OrderHub. Contains configuration schemas, pagination
//! types, the unified error system, and its problem-details rendering.
//!
//! This crate has **no** internal dependencies on other OrderHub crates.

pub mod config;
pub mod error;
pub mod problem;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind, FieldErrors};
pub use result::AppResult;
