//! Process-local store implementations.
//!
//! Both stores share one [`MemoryDatabase`] so order inserts can check the
//! customer foreign key, mirroring the Postgres constraints.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use orderhub_core::error::AppError;
use orderhub_core::result::AppResult;
use orderhub_core::types::PageRequest;
use orderhub_entity::{Customer, Order};

use crate::store::{CustomerStore, OrderFilter, OrderStore};

#[derive(Debug, Default)]
struct Tables {
    customers: HashMap<Uuid, Customer>,
    orders: HashMap<Uuid, Order>,
}

/// Shared in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Customer store over these tables.
    pub fn customers(&self) -> MemoryCustomerStore {
        MemoryCustomerStore { db: self.clone() }
    }

    /// Order store over these tables.
    pub fn orders(&self) -> MemoryOrderStore {
        MemoryOrderStore { db: self.clone() }
    }
}

/// In-memory [`CustomerStore`].
#[derive(Debug, Clone)]
pub struct MemoryCustomerStore {
    db: MemoryDatabase,
}

fn check_customer_keys(tables: &Tables, customer: &Customer) -> AppResult<()> {
    for other in tables.customers.values() {
        if other.id == customer.id {
            continue;
        }
        if other.email == customer.email {
            return Err(AppError::conflict("A customer with this email already exists"));
        }
        if other.customer_number == customer.customer_number {
            return Err(AppError::conflict("Customer number is already in use"));
        }
    }
    Ok(())
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn insert(&self, customer: &Customer) -> AppResult<()> {
        let mut tables = self.db.tables.write().await;
        if tables.customers.contains_key(&customer.id) {
            return Err(AppError::conflict("A record with the same key already exists"));
        }
        check_customer_keys(&tables, customer)?;
        tables.customers.insert(customer.id, customer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        Ok(self.db.tables.read().await.customers.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let tables = self.db.tables.read().await;
        let mut customers: Vec<Customer> = tables
            .customers
            .values()
            .filter(|c| c.is_active())
            .cloned()
            .collect();
        customers.sort_by(|a, b| b.created_at_utc.cmp(&a.created_at_utc));
        Ok(customers)
    }

    async fn update(&self, customer: &Customer) -> AppResult<bool> {
        let mut tables = self.db.tables.write().await;
        if !tables.customers.contains_key(&customer.id) {
            return Ok(false);
        }
        check_customer_keys(&tables, customer)?;
        if let Some(existing) = tables.customers.get_mut(&customer.id) {
            // Creation stamps and the number are not writable.
            let created_at_utc = existing.created_at_utc;
            let created_by = existing.created_by.take();
            let customer_number = std::mem::take(&mut existing.customer_number);
            *existing = Customer {
                created_at_utc,
                created_by,
                customer_number,
                ..customer.clone()
            };
        }
        Ok(true)
    }

    async fn exists_and_active(&self, id: Uuid) -> AppResult<bool> {
        Ok(self
            .db
            .tables
            .read()
            .await
            .customers
            .get(&id)
            .is_some_and(Customer::is_active))
    }

    async fn find_deleted_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Customer>> {
        let tables = self.db.tables.read().await;
        let mut customers: Vec<Customer> = tables
            .customers
            .values()
            .filter(|c| c.is_deleted && c.deleted_at_utc.is_some_and(|at| at < cutoff))
            .cloned()
            .collect();
        customers.sort_by_key(|c| c.deleted_at_utc);
        Ok(customers)
    }
}

/// In-memory [`OrderStore`].
#[derive(Debug, Clone)]
pub struct MemoryOrderStore {
    db: MemoryDatabase,
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: &Order) -> AppResult<()> {
        let mut tables = self.db.tables.write().await;
        if !tables.customers.contains_key(&order.customer_id) {
            return Err(AppError::conflict("Referenced customer does not exist"));
        }
        if tables.orders.contains_key(&order.id)
            || tables
                .orders
                .values()
                .any(|o| o.order_number == order.order_number)
        {
            return Err(AppError::conflict("Order number is already in use"));
        }
        tables.orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn find_by_customer(
        &self,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> AppResult<Vec<Order>> {
        let tables = self.db.tables.read().await;
        let mut orders: Vec<&Order> = tables.orders.values().filter(|o| filter.matches(o)).collect();
        orders.sort_by(|a, b| {
            b.order_date_utc
                .cmp(&a.order_date_utc)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(orders
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count_by_customer(&self, filter: &OrderFilter) -> AppResult<u64> {
        let tables = self.db.tables.read().await;
        Ok(tables.orders.values().filter(|o| filter.matches(o)).count() as u64)
    }
}
