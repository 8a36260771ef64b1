//! Cultura Server: company shift status and colleague presence.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use cultura_core::config::AppConfig;
use cultura_core::error::AppError;
use cultura_database::{DatabasePool, MemberRepository, MemoryMemberRepository, PgMemberRepository};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `CULTURA_ENV` overlay, and `CULTURA__*`
/// environment variables, then validate.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CULTURA_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
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
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Cultura v{}", env!("CARGO_PKG_VERSION"));

    let (member_repo, db_pool) = build_repository(&config).await?;

    let result = cultura_api::run_server(config, member_repo).await;

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Cultura server shut down");
    result
}

/// Select the member store from `database.provider`.
async fn build_repository(
    config: &AppConfig,
) -> Result<(Arc<dyn MemberRepository>, Option<DatabasePool>), AppError> {
    match config.database.provider.as_str() {
        "memory" => {
            tracing::warn!("Using in-memory member store; nothing will be persisted");
            let repo: Arc<dyn MemberRepository> = Arc::new(MemoryMemberRepository::new());
            Ok((repo, None))
        }
        _ => {
            let pool = DatabasePool::connect(&config.database).await?;

            if config.database.run_migrations {
                cultura_database::migration::run_migrations(pool.pool()).await?;
            }

            let repo: Arc<dyn MemberRepository> =
                Arc::new(PgMemberRepository::new(pool.pool().clone()));
            Ok((repo, Some(pool)))
        }
    }
}
