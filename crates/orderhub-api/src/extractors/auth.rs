//! `AuthUser` extractor — pulls the bearer token from the Authorization header, validates it, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use tracing::debug;

use orderhub_core::error::AppError;
use orderhub_core::problem::ACCESS_DENIED;
use orderhub_service::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    debug!(reason = %rejection, "Bearer token missing");
                    AppError::authentication(ACCESS_DENIED)
                })?;

        // The decoder's message says why; callers only ever see the generic one.
        let claims = state.jwt_decoder.decode(bearer.token()).map_err(|e| {
            debug!(reason = %e.message, "Bearer token rejected");
            AppError::authentication(ACCESS_DENIED)
        })?;

        Ok(AuthUser(RequestContext::new(
            claims.sub,
            claims.email,
            claims.role,
        )))
    }
}
