//! Axum middleware stack.

pub mod cors;
pub mod logging;
pub mod security_headers;
pub mod timeout;
