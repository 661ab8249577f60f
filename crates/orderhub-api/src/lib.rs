//! # orderhub-api
//!
//! HTTP API layer for OrderHub built on Axum.
//!
//! Provides the REST endpoints, middleware (security headers, logging,
//! CORS), extractors, and request/response DTOs. Error bodies come from
//! [`orderhub_core::problem`].

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
