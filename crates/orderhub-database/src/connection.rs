//! Backend selection and PostgreSQL connection pool management.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use orderhub_core::config::{DatabaseBackend, DatabaseConfig};
use orderhub_core::error::{AppError, ErrorKind};

use crate::memory::MemoryDatabase;
use crate::repositories::{CustomerRepository, OrderRepository};
use crate::store::{CustomerStore, OrderStore};

/// The configured storage backend.
#[derive(Debug, Clone)]
pub enum Database {
    /// A sqlx PostgreSQL pool.
    Postgres(PgPool),
    /// Shared process-local tables.
    Memory(MemoryDatabase),
}

/// Trait objects for every store, handed to the service layer.
#[derive(Clone)]
pub struct Stores {
    pub customers: Arc<dyn CustomerStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl Database {
    /// Open the backend named in the configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.backend {
            DatabaseBackend::Postgres => Ok(Self::Postgres(connect_postgres(config).await?)),
            DatabaseBackend::Memory => {
                info!("Using in-memory database; data is lost on shutdown");
                Ok(Self::Memory(MemoryDatabase::new()))
            }
        }
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Build the store implementations for this backend.
    pub fn stores(&self) -> Stores {
        match self {
            Self::Postgres(pool) => Stores {
                customers: Arc::new(CustomerRepository::new(pool.clone())),
                orders: Arc::new(OrderRepository::new(pool.clone())),
            },
            Self::Memory(db) => Stores {
                customers: Arc::new(db.customers()),
                orders: Arc::new(db.orders()),
            },
        }
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        match self {
            Self::Postgres(pool) => sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .map(|v| v == 1)
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e)),
            Self::Memory(_) => Ok(true),
        }
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        if let Self::Postgres(pool) = self {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}

async fn connect_postgres(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Successfully connected to PostgreSQL");
    Ok(pool)
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at_pos) = url[scheme_end..].find('@').map(|p| p + scheme_end) else {
        return url.to_string();
    };
    match url[scheme_end..at_pos].find(':') {
        Some(colon) => format!("{}:****{}", &url[..scheme_end + colon], &url[at_pos..]),
        None => url.to_string(),
    }
}
