//! Company working-hours configuration.

use serde::{Deserialize, Serialize};

/// Fixed company timezone and daily shift schedule.
///
/// Not user-editable; one value per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// IANA timezone identifier, e.g. `"Europe/Istanbul"`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Shift boundaries in fractional hours of the local day.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// Raw schedule boundaries as read from configuration.
///
/// Ordering (`start < lunch_start < lunch_end < end`) is checked when the
/// shift clock is constructed, not at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Shift start, e.g. `9.0`.
    #[serde(default = "default_start")]
    pub start: f64,
    /// Lunch break start, e.g. `12.0`.
    #[serde(default = "default_lunch_start")]
    pub lunch_start: f64,
    /// Lunch break end, e.g. `13.0`.
    #[serde(default = "default_lunch_end")]
    pub lunch_end: f64,
    /// Shift end, e.g. `17.0`.
    #[serde(default = "default_end")]
    pub end: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            end: default_end(),
        }
    }
}

fn default_timezone() -> String {
    "Europe/Istanbul".to_string()
}

fn default_start() -> f64 {
    9.0
}

fn default_lunch_start() -> f64 {
    12.0
}

fn default_lunch_end() -> f64 {
    13.0
}

fn default_end() -> f64 {
    17.0
}
