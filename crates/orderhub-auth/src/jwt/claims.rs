//! JWT claims structure used in access tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload embedded in every access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user identifier (the login email).
    pub sub: String,
    /// Email of the authenticated user.
    pub email: String,
    /// One entry per granted role.
    #[serde(default)]
    pub role: Vec<String>,
    /// Token issuer.
    pub iss: String,
    /// Intended audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
}
