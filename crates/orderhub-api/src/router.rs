//! Route definitions for the OrderHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the routing table and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(customer_routes())
        .merge(order_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Token issuance
fn auth_routes() -> Router<AppState> {
    Router::new().route("/authentication/login", post(handlers::auth::login))
}

/// Customer CRUD
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route(
            "/customers/{id}",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        )
}

/// Orders of one customer
fn order_routes() -> Router<AppState> {
    Router::new().route(
        "/customers/{customer_id}/orders",
        get(handlers::orders::list_customer_orders),
    )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
