//! Configuration management commands.

use clap::{Args, Subcommand};

use cultura_core::error::AppError;
use cultura_database::connection::mask_password;
use cultura_status::ShiftClock;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Validate the configuration, including the company schedule
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            config.database.url = mask_password(&config.database.url);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{config:#?}"),
            }
        }
        ConfigCommand::Validate => {
            let result = super::load_config(config_path).and_then(|config| {
                ShiftClock::from_config(&config.company)?;
                Ok(config)
            });

            match result {
                Ok(config) => {
                    output::print_success(&format!("Configuration '{config_path}' is valid"));
                    let schedule = &config.company.schedule;
                    output::print_kv(
                        "Server",
                        &format!("{}:{}", config.server.host, config.server.port),
                    );
                    output::print_kv("Database", &config.database.provider);
                    output::print_kv("Timezone", &config.company.timezone);
                    output::print_kv(
                        "Schedule",
                        &format!(
                            "{} / {}-{} / {}",
                            schedule.start, schedule.lunch_start, schedule.lunch_end, schedule.end
                        ),
                    );
                    output::print_kv(
                        "Online window",
                        &format!("{}s", config.presence.online_window_seconds),
                    );
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {e}"));
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
