//! Auth handlers — login.

use axum::Json;
use axum::extract::State;
use tracing::info;

use orderhub_core::error::AppError;

use crate::dto::{LoginRequest, LoginResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/authentication/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state.credentials.verify(&req.email, &req.password)?;

    let issued = state
        .jwt_encoder
        .generate_token(&user.user_id, &user.email, &user.roles)?;

    info!(email = %user.email, expires_at = %issued.expires_at, "User authenticated");

    Ok(Json(LoginResponse {
        token: issued.token,
        email: user.email,
        expires_at: issued.expires_at,
    }))
}
