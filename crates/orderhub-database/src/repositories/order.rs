//! Order repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use orderhub_core::error::{AppError, ErrorKind};
use orderhub_core::result::AppResult;
use orderhub_core::types::PageRequest;
use orderhub_entity::Order;

use super::map_write_error;
use crate::store::{OrderFilter, OrderStore};

/// Shared `WHERE` clause; `$1..$4` are customer, status, from, to.
const FILTER_CLAUSE: &str = "customer_id = $1 AND is_deleted = FALSE \
     AND ($2::smallint IS NULL OR status = $2) \
     AND ($3::timestamptz IS NULL OR order_date_utc >= $3) \
     AND ($4::timestamptz IS NULL OR order_date_utc < $4)";

/// Postgres-backed order repository.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, order: &Order) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO orders (id, order_number, customer_id, status, order_date_utc, \
             total_amount, notes, is_deleted, deleted_at_utc, created_at_utc, created_by, \
             updated_at_utc, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(order.id)
        .bind(&order.order_number)
        .bind(order.customer_id)
        .bind(order.status)
        .bind(order.order_date_utc)
        .bind(order.total_amount)
        .bind(&order.notes)
        .bind(order.is_deleted)
        .bind(order.deleted_at_utc)
        .bind(order.created_at_utc)
        .bind(&order.created_by)
        .bind(order.updated_at_utc)
        .bind(&order.updated_by)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create order"))?;
        Ok(())
    }

    async fn find_by_customer(
        &self,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT id, order_number, customer_id, status, order_date_utc, total_amount, notes, \
             is_deleted, deleted_at_utc, created_at_utc, created_by, updated_at_utc, updated_by \
             FROM orders WHERE {FILTER_CLAUSE} \
             ORDER BY order_date_utc DESC, id DESC LIMIT $5 OFFSET $6"
        ))
        .bind(filter.customer_id)
        .bind(filter.status)
        .bind(filter.from_utc)
        .bind(filter.to_utc)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list orders by customer", e)
        })
    }

    async fn count_by_customer(&self, filter: &OrderFilter) -> AppResult<u64> {
        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM orders WHERE {FILTER_CLAUSE}"))
                .bind(filter.customer_id)
                .bind(filter.status)
                .bind(filter.from_utc)
                .bind(filter.to_utc)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to count orders by customer",
                        e,
                    )
                })?;

        Ok(total as u64)
    }
}
