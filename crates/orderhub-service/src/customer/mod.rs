//! Customer use cases.

pub mod request;
pub mod service;

pub use request::{CreateCustomerRequest, UpdateCustomerRequest};
pub use service::CustomerService;
