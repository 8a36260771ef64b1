//! Company shift status preview.

use chrono::{NaiveTime, Timelike, Utc};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cultura_core::error::AppError;
use cultura_status::{CompanyStatus, ShiftClock};

use crate::output::{self, OutputFormat};

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Local company time as HH:MM instead of now
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    #[tabled(rename = "Local time")]
    local_time: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Progress")]
    progress_percent: u8,
    #[tabled(rename = "Next")]
    next_boundary_time: String,
    #[tabled(rename = "Label")]
    next_label_key: String,
    #[tabled(rename = "Color")]
    color_tag: String,
}

impl StatusRow {
    fn new(local_time: String, status: &CompanyStatus) -> Self {
        Self {
            local_time,
            state: status.state.to_string(),
            progress_percent: status.progress_percent,
            next_boundary_time: status.next_boundary_time.clone(),
            next_label_key: status.next_label_key.as_str().to_string(),
            color_tag: status.color_tag.as_str().to_string(),
        }
    }
}

/// Execute the status command
pub async fn execute(
    args: &StatusArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let clock = ShiftClock::from_config(&config.company)?;

    let (local_time, status) = match &args.at {
        Some(at) => {
            let time = parse_local_time(at)?;
            let time_val = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;
            (time.format("%H:%M").to_string(), clock.schedule().status_at(time_val))
        }
        None => {
            let now = Utc::now();
            (
                cultura_status::time::format_local_hm(now, clock.timezone()),
                clock.status_at_instant(now),
            )
        }
    };

    output::print_item(&StatusRow::new(local_time, &status), format);
    Ok(())
}

fn parse_local_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time '{raw}', expected HH:MM")))
}
