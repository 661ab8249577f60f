//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod gdpr;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, SecurityHeadersConfig, ServerConfig};
pub use self::auth::{AuthConfig, ConfiguredUser};
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::gdpr::GdprConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "ORDERHUB_ENV";

/// Name of the development environment.
pub const DEVELOPMENT: &str = "development";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Personal data retention settings.
    #[serde(default)]
    pub gdpr: GdprConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `ORDERHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .set_override("server.environment", env)?
            .add_source(
                config::Environment::with_prefix("ORDERHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the environment name from `ORDERHUB_ENV`, defaulting to development.
    pub fn environment_from_env() -> String {
        std::env::var(ENV_VAR).unwrap_or_else(|_| DEVELOPMENT.to_string())
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.len() < auth::MIN_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {} bytes",
                auth::MIN_SECRET_LENGTH
            )));
        }
        if self.auth.issuer.is_empty() || self.auth.audience.is_empty() {
            return Err(AppError::configuration(
                "auth.issuer and auth.audience must be set",
            ));
        }
        if !(1..=auth::MAX_EXPIRATION_MINUTES).contains(&self.auth.expiration_minutes) {
            return Err(AppError::configuration(format!(
                "auth.expiration_minutes must be between 1 and {}",
                auth::MAX_EXPIRATION_MINUTES
            )));
        }
        if let Some(user) = self
            .auth
            .users
            .iter()
            .find(|u| u.email.len() > auth::MAX_EMAIL_LENGTH)
        {
            return Err(AppError::configuration(format!(
                "auth.users email '{}...' exceeds {} characters",
                user.email.chars().take(32).collect::<String>(),
                auth::MAX_EMAIL_LENGTH
            )));
        }
        if self.gdpr.data_retention_days > gdpr::MAX_RETENTION_DAYS {
            return Err(AppError::configuration(format!(
                "gdpr.data_retention_days must not exceed {}",
                gdpr::MAX_RETENTION_DAYS
            )));
        }
        if !(1..=gdpr::MAX_SWEEP_INTERVAL_HOURS).contains(&self.gdpr.sweep_interval_hours) {
            return Err(AppError::configuration(format!(
                "gdpr.sweep_interval_hours must be between 1 and {}",
                gdpr::MAX_SWEEP_INTERVAL_HOURS
            )));
        }
        if self.database.backend == DatabaseBackend::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }
        Ok(())
    }
}
