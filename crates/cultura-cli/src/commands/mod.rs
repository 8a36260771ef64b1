//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod presence;
pub mod status;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use cultura_core::config::AppConfig;
use cultura_core::error::AppError;
use cultura_database::DatabasePool;

/// Cultura operator tools
#[derive(Debug, Parser)]
#[command(name = "cultura", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the company shift status now or at a given local time
    Status(status::StatusArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Run database migrations
    Migrate,
    /// Resolve and list presence for all members
    Presence(presence::PresenceArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Status(args) => status::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Presence(args) => presence::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load and validate configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load_file(config_path)?;
    config.validate()?;
    tracing::debug!(path = config_path, provider = %config.database.provider, "Configuration loaded");
    Ok(config)
}

/// Helper: connect to PostgreSQL, refusing the in-memory provider
pub async fn connect_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != "postgres" {
        return Err(AppError::configuration(format!(
            "This command needs database.provider = \"postgres\" (configured: \"{}\")",
            config.database.provider
        )));
    }
    DatabasePool::connect(&config.database).await
}
