//! Storage traits implemented by every database backend.
//!
//! Services depend on these traits only, so the Postgres repositories and
//! the in-memory tables are interchangeable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use orderhub_core::result::AppResult;
use orderhub_core::types::PageRequest;
use orderhub_entity::{Customer, Order, OrderStatus};

/// Customer persistence.
#[async_trait]
pub trait CustomerStore: Send + Sync + 'static {
    /// Insert a new customer. Duplicate emails or numbers are a conflict.
    async fn insert(&self, customer: &Customer) -> AppResult<()>;

    /// Find a customer by id, including soft-deleted rows.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// All customers that are not soft-deleted, newest first.
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Persist every mutable column. Returns `false` if the row is gone.
    async fn update(&self, customer: &Customer) -> AppResult<bool>;

    /// Whether the customer exists and is not soft-deleted.
    async fn exists_and_active(&self, id: Uuid) -> AppResult<bool>;

    /// Soft-deleted customers whose deletion happened before `cutoff`.
    async fn find_deleted_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Customer>>;
}

/// Predicates for listing a customer's orders.
///
/// `from_utc` is inclusive and `to_utc` exclusive. Soft-deleted orders
/// never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFilter {
    pub customer_id: Uuid,
    pub status: Option<OrderStatus>,
    pub from_utc: Option<DateTime<Utc>>,
    pub to_utc: Option<DateTime<Utc>>,
}

impl OrderFilter {
    /// A filter matching every active order of the customer.
    pub fn for_customer(customer_id: Uuid) -> Self {
        Self {
            customer_id,
            status: None,
            from_utc: None,
            to_utc: None,
        }
    }

    /// Whether `order` satisfies every predicate.
    pub fn matches(&self, order: &Order) -> bool {
        order.customer_id == self.customer_id
            && !order.is_deleted
            && self.status.is_none_or(|s| order.status == s)
            && self.from_utc.is_none_or(|from| order.order_date_utc >= from)
            && self.to_utc.is_none_or(|to| order.order_date_utc < to)
    }
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Insert a new order. The customer must exist.
    async fn insert(&self, order: &Order) -> AppResult<()>;

    /// One page of matching orders, newest `order_date_utc` first with
    /// `id` descending as the tie-breaker.
    async fn find_by_customer(
        &self,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> AppResult<Vec<Order>>;

    /// Number of orders matching the filter, ignoring paging.
    async fn count_by_customer(&self, filter: &OrderFilter) -> AppResult<u64>;
}
