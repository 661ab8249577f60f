//! Customer CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::{info, warn};
use uuid::Uuid;

use orderhub_core::error::AppError;
use orderhub_service::{
    CreateCustomerRequest, CustomerDto, GetCustomerByIdQuery, UpdateCustomerRequest,
};

use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Customer '{id}' was not found"))
}

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<CustomerDto>>, AppError> {
    let customers = state.customer_service.get_all().await?;
    info!(count = customers.len(), "Retrieved customers");
    Ok(Json(customers))
}

/// GET /api/customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<CustomerDto>, AppError> {
    match state.mediator.send(GetCustomerByIdQuery::new(id)).await? {
        Some(customer) => Ok(Json(customer)),
        None => {
            warn!(customer_id = %id, "Customer not found");
            Err(not_found(id))
        }
    }
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.customer_service.create(auth.context(), req).await?;
    let location = format!("/api/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer),
    ))
}

/// PUT /api/customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateCustomerRequest>,
) -> Result<StatusCode, AppError> {
    if state
        .customer_service
        .update(auth.context(), id, req)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// DELETE /api/customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.customer_service.soft_delete(auth.context(), id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
