//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// Email the token was issued to.
    pub email: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Backend name and reachability.
    pub database: String,
}
