//! Single-customer lookup through the mediator.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use orderhub_core::error::AppError;
use orderhub_database::CustomerStore;
use orderhub_entity::Customer;

use crate::dto::CustomerDto;
use crate::mediator::{Query, QueryHandler};
use crate::validation::not_nil;

/// Fetch one active customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomerByIdQuery {
    #[validate(custom(function = "not_nil", message = "'Id' must not be empty."))]
    pub id: Uuid,
}

impl GetCustomerByIdQuery {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl Query for GetCustomerByIdQuery {
    type Output = Option<CustomerDto>;
    const NAME: &'static str = "GetCustomerById";
}

/// Answers [`GetCustomerByIdQuery`]; soft-deleted customers read as absent.
pub struct GetCustomerByIdHandler {
    customers: Arc<dyn CustomerStore>,
}

impl GetCustomerByIdHandler {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl QueryHandler<GetCustomerByIdQuery> for GetCustomerByIdHandler {
    async fn handle(&self, query: GetCustomerByIdQuery) -> Result<Option<CustomerDto>, AppError> {
        let customer = self
            .customers
            .find_by_id(query.id)
            .await?
            .filter(Customer::is_active);

        debug!(customer_id = %query.id, found = customer.is_some(), "Customer lookup");
        Ok(customer.map(CustomerDto::from))
    }
}
