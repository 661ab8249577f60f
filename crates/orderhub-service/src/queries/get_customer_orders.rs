//! Paginated, filtered listing of a customer's orders.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use orderhub_core::error::AppError;
use orderhub_core::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PagedResult};
use orderhub_database::{OrderFilter, OrderStore};
use orderhub_entity::OrderStatus;

use crate::dto::OrderDto;
use crate::mediator::{Query, QueryHandler};
use crate::validation::{error, not_nil};

/// One page of a customer's orders, newest first.
///
/// `from_utc` is inclusive and `to_utc` exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range", skip_on_field_errors = false))]
pub struct GetCustomerOrdersQuery {
    #[validate(custom(function = "not_nil", message = "'Customer Id' must not be empty."))]
    pub customer_id: Uuid,

    /// Numeric [`OrderStatus`] code.
    #[validate(range(min = 0, max = 4, message = "'Status' must be a valid order status."))]
    pub status: Option<i16>,

    pub from_utc: Option<DateTime<Utc>>,
    pub to_utc: Option<DateTime<Utc>>,

    #[validate(range(
        min = 1,
        message = "'Page Number' must be greater than or equal to '1'."
    ))]
    pub page_number: i32,

    #[validate(range(
        min = 1,
        max = 200,
        message = "'Page Size' must be between 1 and 200."
    ))]
    pub page_size: i32,
}

fn validate_date_range(query: &GetCustomerOrdersQuery) -> Result<(), ValidationError> {
    match (query.from_utc, query.to_utc) {
        (Some(from), Some(to)) if from > to => {
            Err(error("date_range", "'FromUtc' must be <= 'ToUtc'."))
        }
        _ => Ok(()),
    }
}

impl GetCustomerOrdersQuery {
    /// All orders of the customer, first page, default size.
    pub fn new(customer_id: Uuid) -> Self {
        Self {
            customer_id,
            status: None,
            from_utc: None,
            to_utc: None,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE as i32,
        }
    }
}

impl Query for GetCustomerOrdersQuery {
    type Output = PagedResult<OrderDto>;
    const NAME: &'static str = "GetCustomerOrders";
}

/// Answers [`GetCustomerOrdersQuery`].
pub struct GetCustomerOrdersHandler {
    orders: Arc<dyn OrderStore>,
}

impl GetCustomerOrdersHandler {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl QueryHandler<GetCustomerOrdersQuery> for GetCustomerOrdersHandler {
    async fn handle(&self, query: GetCustomerOrdersQuery) -> Result<PagedResult<OrderDto>, AppError> {
        let page = PageRequest::new(query.page_number.into(), query.page_size.into())
            .capped(MAX_PAGE_SIZE);

        let status = query
            .status
            .map(|code| {
                OrderStatus::from_code(code.into())
                    .ok_or_else(|| AppError::field("status", "'Status' must be a valid order status."))
            })
            .transpose()?;

        let filter = OrderFilter {
            customer_id: query.customer_id,
            status,
            from_utc: query.from_utc,
            to_utc: query.to_utc,
        };

        let total = self.orders.count_by_customer(&filter).await?;
        if total == 0 {
            debug!(customer_id = %query.customer_id, "No orders matched");
            return Ok(PagedResult::empty(page));
        }

        let orders = self.orders.find_by_customer(&filter, page).await?;
        debug!(
            customer_id = %query.customer_id,
            total,
            page = page.page_number,
            returned = orders.len(),
            "Orders page loaded"
        );

        Ok(PagedResult::new(
            orders.into_iter().map(OrderDto::from).collect(),
            page,
            total,
        ))
    }
}
