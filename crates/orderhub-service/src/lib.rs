//! # orderhub-service
//!
//! Business logic service layer for OrderHub. Services orchestrate the
//! storage traits to implement application-level use cases; read-side
//! queries go through the [`Mediator`], which validates them first.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod customer;
pub mod dto;
pub mod mediator;
pub mod queries;
pub mod retention;
pub mod validation;

pub use context::RequestContext;
pub use customer::{CreateCustomerRequest, CustomerService, UpdateCustomerRequest};
pub use dto::{CustomerDto, OrderDto};
pub use mediator::{Mediator, Query, QueryHandler};
pub use queries::{GetCustomerByIdQuery, GetCustomerOrdersQuery, build_mediator};
pub use retention::RetentionService;
