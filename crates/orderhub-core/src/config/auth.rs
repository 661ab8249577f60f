//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Minimum HMAC secret length in bytes for HS256.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRATION_MINUTES: u64 = 525_600;

/// Longest accepted account email; matches the audit columns.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Role granted to users whose entry lists none.
pub const DEFAULT_ROLE: &str = "User";

/// JWT and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Value of the `iss` claim, required on incoming tokens.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Value of the `aud` claim, required on incoming tokens.
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_expiration")]
    pub expiration_minutes: u64,
    /// Accounts allowed to log in.
    #[serde(default)]
    pub users: Vec<ConfiguredUser>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            issuer: default_issuer(),
            audience: default_audience(),
            expiration_minutes: default_expiration(),
            users: Vec::new(),
        }
    }
}

/// A login account with an Argon2 PHC password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfiguredUser {
    /// Login email, compared case-insensitively.
    pub email: String,
    /// Argon2 hash produced by `orderhub-server hash-password`.
    pub password_hash: String,
    /// Roles written into the token.
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION_0123456789abcdef".to_string()
}

fn default_issuer() -> String {
    "OrderHub".to_string()
}

fn default_audience() -> String {
    "OrderHub.Clients".to_string()
}

fn default_expiration() -> u64 {
    60
}

fn default_roles() -> Vec<String> {
    vec![DEFAULT_ROLE.to_string()]
}
