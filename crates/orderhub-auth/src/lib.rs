//! # orderhub-auth
//!
//! Authentication for OrderHub.
//!
//! ## Modules
//!
//! - `jwt` — HS256 token issuance and validation
//! - `password` — Argon2id password hashing
//! - `credentials` — login verification against configured accounts

pub mod credentials;
pub mod jwt;
pub mod password;

pub use credentials::{AuthenticatedUser, CredentialVerifier, INVALID_CREDENTIALS};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
