//! Database migration runner.

use tracing::info;

use orderhub_core::error::{AppError, ErrorKind};

use crate::connection::Database;

/// Apply pending migrations. The in-memory backend has no schema.
pub async fn run_migrations(db: &Database) -> Result<(), AppError> {
    let Database::Postgres(pool) = db else {
        return Ok(());
    };

    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
