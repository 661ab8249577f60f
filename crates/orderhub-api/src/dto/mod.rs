//! Request and response bodies owned by the HTTP layer.

pub mod request;
pub mod response;

pub use request::{LoginRequest, OrdersQueryParams};
pub use response::{HealthResponse, LoginResponse};
