//! Problem-details HTTP bodies and the `AppError` → response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind, FieldErrors, REQUEST_FIELD};

/// Message returned when a bearer token is missing or rejected.
pub const ACCESS_DENIED: &str = "Access denied. Valid authentication token required.";

/// Message returned for every unexpected failure; details stay in the logs.
pub const INTERNAL_ERROR: &str = "An unexpected error occurred. Please contact support.";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// `https://httpstatuses.com/<status>`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short summary of the problem class.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ProblemDetails {
    /// Empty body for `status` with the given title.
    pub fn new(status: StatusCode, title: &str) -> Self {
        Self {
            kind: format!("https://httpstatuses.com/{}", status.as_u16()),
            title: title.to_string(),
            status: status.as_u16(),
            message: None,
            errors: None,
        }
    }

    /// Attach a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.kind {
            ErrorKind::Validation => {
                tracing::warn!(error = %self.message, "Validation error");
                let errors = self.errors.unwrap_or_else(|| {
                    FieldErrors::from([(REQUEST_FIELD.to_string(), vec![self.message.clone()])])
                });
                (
                    StatusCode::BAD_REQUEST,
                    ProblemDetails::new(StatusCode::BAD_REQUEST, "Validation failed")
                        .with_errors(errors),
                )
            }
            ErrorKind::Authentication => {
                tracing::warn!(error = %self.message, "Unauthorized access attempt");
                (
                    StatusCode::UNAUTHORIZED,
                    ProblemDetails::new(StatusCode::UNAUTHORIZED, "Unauthorized")
                        .with_message(self.message),
                )
            }
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                ProblemDetails::new(StatusCode::NOT_FOUND, "Not Found").with_message(self.message),
            ),
            ErrorKind::Conflict => {
                tracing::warn!(error = %self.message, "Conflict");
                (
                    StatusCode::CONFLICT,
                    ProblemDetails::new(StatusCode::CONFLICT, "Conflict").with_message(self.message),
                )
            }
            ErrorKind::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ProblemDetails::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
                    .with_message(self.message),
            ),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(
                    kind = %self.kind,
                    error = %self.message,
                    source = ?self.source,
                    "Unhandled error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                        .with_message(INTERNAL_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
