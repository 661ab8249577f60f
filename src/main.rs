//! OrderHub Server — customer and order management API
//!
//! Main entry point: parses the command line, loads configuration,
//! initializes logging, and either serves HTTP or runs a utility command.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use orderhub_auth::PasswordHasher;
use orderhub_core::config::AppConfig;

/// OrderHub server.
#[derive(Debug, Parser)]
#[command(name = "orderhub-server", version, about)]
struct Cli {
    /// Configuration environment (overrides ORDERHUB_ENV).
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print an Argon2 hash for an `auth.users` entry.
    HashPassword {
        /// Plain-text password to hash.
        password: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::HashPassword { password }) = &cli.command {
        match PasswordHasher.hash_password(password) {
            Ok(hash) => println!("{hash}"),
            Err(e) => {
                eprintln!("Failed to hash password: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let env = cli.env.unwrap_or_else(AppConfig::environment_from_env);
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = orderhub_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
