//! Customer order listing.

use axum::Json;
use axum::extract::State;
use tracing::{debug, info, warn};
use uuid::Uuid;

use orderhub_core::error::AppError;
use orderhub_core::types::PagedResult;
use orderhub_service::{GetCustomerOrdersQuery, OrderDto};

use crate::dto::OrdersQueryParams;
use crate::extractors::{ApiPath, ApiQuery, AuthUser};
use crate::state::AppState;

/// GET /api/customers/{customer_id}/orders
///
/// An unknown customer yields an empty page rather than 404.
pub async fn list_customer_orders(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(customer_id): ApiPath<Uuid>,
    ApiQuery(mut params): ApiQuery<OrdersQueryParams>,
) -> Result<Json<PagedResult<OrderDto>>, AppError> {
    info!(
        customer_id = %customer_id,
        status = ?params.status,
        from_utc = ?params.from_utc,
        to_utc = ?params.to_utc,
        page_number = params.page_number,
        page_size = params.page_size,
        "Listing customer orders"
    );

    if params.normalize_date_range() {
        debug!(
            customer_id = %customer_id,
            from_utc = ?params.from_utc,
            to_utc = ?params.to_utc,
            "Swapped reversed date range"
        );
    }

    let result = state
        .mediator
        .send(GetCustomerOrdersQuery {
            customer_id,
            status: params.status.map(i16::from),
            from_utc: params.from_utc,
            to_utc: params.to_utc,
            page_number: params.page_number,
            page_size: params.page_size,
        })
        .await?;

    if result.total_count == 0 {
        warn!(
            customer_id = %customer_id,
            status = ?params.status,
            from_utc = ?params.from_utc,
            to_utc = ?params.to_utc,
            "No orders found"
        );
    } else {
        info!(
            customer_id = %customer_id,
            total_count = result.total_count,
            page_number = result.page_number,
            page_size = result.page_size,
            "Returning orders"
        );
    }

    Ok(Json(result))
}
