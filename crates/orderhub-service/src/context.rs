//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity recorded in `created_by`/`updated_by` by background jobs.
pub const SYSTEM_USER: &str = "system";

/// Context for the current authenticated request.
///
/// Built from the bearer token by the API layer and passed into service
/// methods so that every write knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id (the `sub` claim).
    pub user_id: String,
    /// The caller's email.
    pub email: String,
    /// Roles granted by the token.
    pub roles: Vec<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            roles,
            request_time: Utc::now(),
        }
    }

    /// Context for work not triggered by a caller.
    pub fn system() -> Self {
        Self::new(SYSTEM_USER, SYSTEM_USER, Vec::new())
    }

    /// Value for audit columns.
    pub fn actor(&self) -> Option<String> {
        Some(self.user_id.clone())
    }
}
