//! Login verification against the configured accounts.

use std::sync::OnceLock;

use tracing::{error, info, warn};

use orderhub_core::config::ConfiguredUser;
use orderhub_core::error::AppError;

use crate::password::PasswordHasher;

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Identity established by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable user identifier written to `sub`.
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Checks email/password pairs against `auth.users`.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Vec<ConfiguredUser>,
    hasher: PasswordHasher,
    /// Verified against when the email is unknown.
    dummy_hash: String,
}

impl CredentialVerifier {
    /// Creates a verifier over the given accounts.
    ///
    /// Fails if the hasher cannot produce the stand-in hash used for
    /// unknown emails.
    pub fn new(users: Vec<ConfiguredUser>, hasher: PasswordHasher) -> Result<Self, AppError> {
        let dummy_hash = dummy_hash(&hasher)?;
        Ok(Self {
            users,
            hasher,
            dummy_hash,
        })
    }

    /// Number of configured accounts.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Verifies the pair, returning the user on success.
    ///
    /// Unknown emails still run one hash verification so both failure
    /// paths take comparable time.
    pub fn verify(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let email = email.trim();
        let Some(user) = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        else {
            if let Err(e) = self.hasher.verify_password(password, &self.dummy_hash) {
                error!(error = %e, "Stand-in password verification failed");
            }
            warn!(email = %email, "Login attempt for unknown account");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(email = %user.email, "Login attempt with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        info!(email = %user.email, "Credentials verified");
        Ok(AuthenticatedUser {
            user_id: user.email.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
        })
    }

}

fn dummy_hash(hasher: &PasswordHasher) -> Result<String, AppError> {
    static DUMMY: OnceLock<String> = OnceLock::new();
    if let Some(hash) = DUMMY.get() {
        return Ok(hash.clone());
    }
    let hash = hasher.hash_password("orderhub-dummy-password")?;
    Ok(DUMMY.get_or_init(|| hash).clone())
}
