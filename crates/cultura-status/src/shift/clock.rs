//! Instant-based entry points for the shift schedule.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use cultura_core::config::CompanyConfig;

use super::schedule::ShiftSchedule;
use super::state::CompanyStatus;
use crate::error::ScheduleError;
use crate::time::local_time_val;

/// Compute where the company is in its day at `now`.
///
/// `now` is converted to local wall-clock time in `tz` at minute precision
/// and classified against `schedule`. Pure: the same inputs always yield the
/// same output.
pub fn compute_company_status(now: DateTime<Utc>, tz: Tz, schedule: &ShiftSchedule) -> CompanyStatus {
    schedule.status_at(local_time_val(now, tz))
}

/// The company timezone paired with its validated schedule.
///
/// Built once at startup from configuration. Holds no time-dependent state;
/// every call recomputes from the instant it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftClock {
    timezone: Tz,
    schedule: ShiftSchedule,
}

impl ShiftClock {
    /// Pair a timezone with a schedule.
    pub fn new(timezone: Tz, schedule: ShiftSchedule) -> Self {
        Self { timezone, schedule }
    }

    /// Build from the `[company]` configuration section, rejecting unknown
    /// timezones and mis-ordered boundaries.
    pub fn from_config(config: &CompanyConfig) -> Result<Self, ScheduleError> {
        let timezone: Tz = config
            .timezone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimezone(config.timezone.clone()))?;
        let schedule = ShiftSchedule::from_config(&config.schedule)?;
        Ok(Self::new(timezone, schedule))
    }

    /// Company timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Validated schedule.
    pub fn schedule(&self) -> &ShiftSchedule {
        &self.schedule
    }

    /// Company status at `now`.
    pub fn status_at_instant(&self, now: DateTime<Utc>) -> CompanyStatus {
        compute_company_status(now, self.timezone, &self.schedule)
    }
}
