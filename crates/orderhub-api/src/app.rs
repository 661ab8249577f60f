//! Application builder — wires router + middleware + state into an Axum app,
//! and runs it until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use orderhub_core::config::AppConfig;
use orderhub_core::error::AppError;
use orderhub_database::Database;
use orderhub_database::migration::run_migrations;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::security_headers::{SecurityHeaders, security_headers};
use crate::middleware::timeout::request_timeout;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let headers = Arc::new(SecurityHeaders::from_config(server));
    let timeout = Duration::from_secs(server.request_timeout_seconds.max(1));
    let body_limit = server.body_limit_bytes;
    let cors = build_cors_layer(&server.cors);

    build_router(state)
        .layer(from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(from_fn_with_state(timeout, request_timeout))
        .layer(from_fn_with_state(headers, security_headers))
}

/// Runs the OrderHub server with the given configuration.
///
/// Connects the database, applies migrations, starts the retention sweep,
/// and serves HTTP until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        "Starting OrderHub server..."
    );

    // ── Step 1: Database connection + migrations ─────────────────
    let database = Database::connect(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(&database).await?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    // ── Step 2: Services ─────────────────────────────────────────
    let state = AppState::new(config, database.clone())?;
    tracing::info!(
        accounts = state.credentials.user_count(),
        queries = ?state.mediator.registered_queries(),
        "Services initialized"
    );

    // ── Step 3: Background retention sweep ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let retention = (*state.retention_service).clone();
    let retention_handle = tokio::spawn(retention.run_until_shutdown(shutdown_rx));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("OrderHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Wait for background tasks ────────────────────────
    if tokio::time::timeout(grace, retention_handle).await.is_err() {
        tracing::warn!("Retention sweep did not stop within the grace period");
    }
    database.close().await;

    tracing::info!("OrderHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
