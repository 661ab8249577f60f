//! Per-request deadline.

use std::time::Duration;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use orderhub_core::problem::ProblemDetails;

/// Fails the request with 408 when the handler outlives `limit`.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(path = %path, timeout_ms = limit.as_millis() as u64, "Request timed out");
            let body = ProblemDetails::new(StatusCode::REQUEST_TIMEOUT, "Request Timeout")
                .with_message("The request took too long to complete.");
            (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response()
        }
    }
}
