//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use orderhub_auth::{CredentialVerifier, JwtDecoder, JwtEncoder, PasswordHasher};
use orderhub_core::config::AppConfig;
use orderhub_core::error::AppError;
use orderhub_database::Database;
use orderhub_service::{CustomerService, Mediator, RetentionService, build_mediator};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Storage backend (PostgreSQL pool or in-memory tables)
    pub database: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login credential check against configured accounts
    pub credentials: Arc<CredentialVerifier>,

    // ── Services ─────────────────────────────────────────────
    /// Customer write and list operations
    pub customer_service: Arc<CustomerService>,
    /// Validated query dispatch
    pub mediator: Arc<Mediator>,
    /// Personal data anonymization
    pub retention_service: Arc<RetentionService>,
}

impl AppState {
    /// Wire every service onto `database`.
    pub fn new(config: AppConfig, database: Database) -> Result<Self, AppError> {
        let stores = database.stores();

        let credentials = CredentialVerifier::new(config.auth.users.clone(), PasswordHasher)?;
        let retention = RetentionService::new(stores.customers.clone(), config.gdpr.clone());

        Ok(Self {
            jwt_encoder: Arc::new(JwtEncoder::new(&config.auth)),
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            credentials: Arc::new(credentials),
            customer_service: Arc::new(CustomerService::new(stores.customers.clone())),
            mediator: Arc::new(build_mediator(&stores)),
            retention_service: Arc::new(retention),
            database,
            config: Arc::new(config),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.server.environment)
            .field("database", &self.database.backend_name())
            .field("mediator", &self.mediator)
            .finish_non_exhaustive()
    }
}
