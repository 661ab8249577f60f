//! Customer lifecycle: create, read, update, soft delete.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use orderhub_core::error::AppError;
use orderhub_database::CustomerStore;
use orderhub_entity::Customer;

use super::request::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::context::RequestContext;
use crate::dto::CustomerDto;

/// Handles customer CRUD on top of a [`CustomerStore`].
#[derive(Clone)]
pub struct CustomerService {
    /// Customer store.
    customers: Arc<dyn CustomerStore>,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Creates a customer from a validated request.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateCustomerRequest,
    ) -> Result<CustomerDto, AppError> {
        let customer = Customer::new(
            trimmed(&req.first_name),
            trimmed(&req.last_name),
            trimmed(&req.email),
            trimmed_optional(req.phone_number.as_deref()),
            ctx.actor(),
        );

        self.customers.insert(&customer).await?;

        info!(
            customer_id = %customer.id,
            customer_number = %customer.customer_number,
            created_by = %ctx.user_id,
            "Customer created"
        );

        Ok(CustomerDto::from(customer))
    }

    /// Lists every customer that is not soft-deleted.
    pub async fn get_all(&self) -> Result<Vec<CustomerDto>, AppError> {
        let customers = self.customers.find_all().await?;
        Ok(customers
            .into_iter()
            .filter(Customer::is_active)
            .map(CustomerDto::from)
            .collect())
    }

    /// Fetches one customer; `None` when missing or soft-deleted.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<CustomerDto>, AppError> {
        Ok(self.find_active(id).await?.map(CustomerDto::from))
    }

    /// Applies an update. Returns `false` without writing when the
    /// customer is missing or soft-deleted.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: UpdateCustomerRequest,
    ) -> Result<bool, AppError> {
        let Some(mut customer) = self.find_active(id).await? else {
            warn!(customer_id = %id, "Update skipped: customer not found");
            return Ok(false);
        };

        customer.first_name = trimmed(&req.first_name);
        customer.last_name = trimmed(&req.last_name);
        customer.email = trimmed(&req.email);
        customer.phone = trimmed_optional(req.phone_number.as_deref());
        customer.updated_at_utc = Some(Utc::now());
        customer.updated_by = ctx.actor();

        let updated = self.customers.update(&customer).await?;
        if updated {
            info!(customer_id = %id, updated_by = %ctx.user_id, "Customer updated");
        }
        Ok(updated)
    }

    /// Marks a customer deleted. Returns `false` without writing when the
    /// customer is missing or already deleted.
    pub async fn soft_delete(&self, ctx: &RequestContext, id: Uuid) -> Result<bool, AppError> {
        let Some(mut customer) = self.find_active(id).await? else {
            warn!(customer_id = %id, "Delete skipped: customer not found or already deleted");
            return Ok(false);
        };

        customer.mark_deleted(Utc::now(), ctx.actor());

        let deleted = self.customers.update(&customer).await?;
        if deleted {
            info!(customer_id = %id, deleted_by = %ctx.user_id, "Customer soft-deleted");
        }
        Ok(deleted)
    }

    /// Whether the customer exists and is not soft-deleted.
    pub async fn exists_and_active(&self, id: Uuid) -> Result<bool, AppError> {
        self.customers.exists_and_active(id).await
    }

    async fn find_active(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        Ok(self
            .customers
            .find_by_id(id)
            .await?
            .filter(Customer::is_active))
    }
}
