//! Queries dispatched through the [`Mediator`](crate::mediator::Mediator).

pub mod get_customer_by_id;
pub mod get_customer_orders;

pub use get_customer_by_id::{GetCustomerByIdHandler, GetCustomerByIdQuery};
pub use get_customer_orders::{GetCustomerOrdersHandler, GetCustomerOrdersQuery};

use orderhub_database::Stores;

use crate::mediator::Mediator;

/// A mediator with every query handler registered.
pub fn build_mediator(stores: &Stores) -> Mediator {
    Mediator::new()
        .with::<GetCustomerByIdQuery, _>(GetCustomerByIdHandler::new(stores.customers.clone()))
        .with::<GetCustomerOrdersQuery, _>(GetCustomerOrdersHandler::new(stores.orders.clone()))
}
