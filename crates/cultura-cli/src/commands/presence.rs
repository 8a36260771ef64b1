//! Presence listing for all members.

use std::sync::Arc;

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cultura_core::error::AppError;
use cultura_database::PgMemberRepository;
use cultura_service::{ColleaguePresence, DashboardService};
use cultura_status::{PresenceResolver, ShiftClock};

use crate::output::{self, OutputFormat};

/// Arguments for the presence command
#[derive(Debug, Args)]
pub struct PresenceArgs {
    /// Maximum number of members to list
    #[arg(short, long, default_value_t = 50)]
    pub limit: u32,
}

#[derive(Debug, Serialize, Tabled)]
struct PresenceRow {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Presence")]
    label: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Detail")]
    detail: String,
    #[tabled(rename = "Last active")]
    last_active: String,
}

impl From<&ColleaguePresence> for PresenceRow {
    fn from(c: &ColleaguePresence) -> Self {
        let sub = &c.presence.sub_label;
        Self {
            name: c.name.clone(),
            label: c.presence.label.as_display().to_string(),
            color: c.presence.color_tag.as_str().to_string(),
            detail: match &sub.time {
                Some(time) => format!("{} {time}", sub.key.as_str()),
                None => sub.key.as_str().to_string(),
            },
            last_active: c
                .last_active_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "never".to_string()),
        }
    }
}

/// Execute the presence command
pub async fn execute(
    args: &PresenceArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let clock = ShiftClock::from_config(&config.company)?;
    let pool = super::connect_database(&config).await?;

    let service = DashboardService::new(
        Arc::new(PgMemberRepository::new(pool.pool().clone())),
        clock,
        PresenceResolver::new(clock.timezone(), config.presence.online_window_seconds),
        args.limit,
    );

    let now = Utc::now();
    let company = service.company_status(now);
    let members = service.list_presence(None, args.limit, &company, now).await?;
    pool.close().await;

    match format {
        OutputFormat::Json => output::print_json(&members),
        OutputFormat::Table => {
            output::print_kv("Company", &format!("{} ({}%)", company.state, company.progress_percent));
            let rows: Vec<PresenceRow> = members.iter().map(PresenceRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
