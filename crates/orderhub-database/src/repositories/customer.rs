//! Customer repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use orderhub_core::error::{AppError, ErrorKind};
use orderhub_core::result::AppResult;
use orderhub_entity::Customer;

use super::map_write_error;
use crate::store::CustomerStore;

const CUSTOMER_COLUMNS: &str = "id, customer_number, first_name, last_name, email, phone, \
     address_line1, address_line2, city, state, postal_code, country, is_deleted, \
     deleted_at_utc, created_at_utc, created_by, updated_at_utc, updated_by";

/// Postgres-backed customer repository.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn insert(&self, customer: &Customer) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO customers (id, customer_number, first_name, last_name, email, phone, \
             address_line1, address_line2, city, state, postal_code, country, is_deleted, \
             deleted_at_utc, created_at_utc, created_by, updated_at_utc, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)",
        )
        .bind(customer.id)
        .bind(&customer.customer_number)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address_line1)
        .bind(&customer.address_line2)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(customer.is_deleted)
        .bind(customer.deleted_at_utc)
        .bind(customer.created_at_utc)
        .bind(&customer.created_by)
        .bind(customer.updated_at_utc)
        .bind(&customer.updated_by)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create customer"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find customer by id", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE is_deleted = FALSE \
             ORDER BY created_at_utc DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list customers", e))
    }

    async fn update(&self, customer: &Customer) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE customers SET first_name = $2, last_name = $3, email = $4, phone = $5, \
             address_line1 = $6, address_line2 = $7, city = $8, state = $9, postal_code = $10, \
             country = $11, is_deleted = $12, deleted_at_utc = $13, updated_at_utc = $14, \
             updated_by = $15 WHERE id = $1",
        )
        .bind(customer.id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address_line1)
        .bind(&customer.address_line2)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(customer.is_deleted)
        .bind(customer.deleted_at_utc)
        .bind(customer.updated_at_utc)
        .bind(&customer.updated_by)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update customer"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_and_active(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1 AND is_deleted = FALSE)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check customer existence", e)
        })
    }

    async fn find_deleted_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers \
             WHERE is_deleted = TRUE AND deleted_at_utc < $1 ORDER BY deleted_at_utc"
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list deleted customers", e)
        })
    }
}
