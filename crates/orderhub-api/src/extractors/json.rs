//! JSON body extractor that runs `validator` rules before the handler sees the value.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

use orderhub_core::error::{AppError, REQUEST_FIELD};

/// A deserialized and validated JSON body.
///
/// Malformed JSON and failed rules both become `400 Validation failed`;
/// a body over the size limit stays `413`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::payload_too_large(rejection.body_text());
    }
    AppError::field(REQUEST_FIELD, rejection.body_text())
}
