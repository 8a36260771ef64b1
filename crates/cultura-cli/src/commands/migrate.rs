//! Database migration command.

use cultura_core::error::AppError;

use crate::output;

/// Apply all pending migrations
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::connect_database(&config).await?;

    println!("Running database migrations...");
    cultura_database::migration::run_migrations(pool.pool()).await?;
    pool.close().await;

    output::print_success("All migrations applied.");
    Ok(())
}
