//! Wall-clock helpers shared by the shift clock and the presence resolver.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Local hour-of-day as a fractional value: `hour + minute / 60`.
///
/// Seconds are ignored, so the result is always a whole number of minutes.
pub fn fractional_hour<T: TimeZone>(local: &DateTime<T>) -> f64 {
    f64::from(local.hour()) + f64::from(local.minute()) / 60.0
}

/// The fractional local hour of `now` in `tz`.
pub fn local_time_val(now: DateTime<Utc>, tz: Tz) -> f64 {
    fractional_hour(&now.with_timezone(&tz))
}

/// Format a fractional hour as a zero-padded 24-hour `HH:MM` string.
///
/// Values wrap around midnight, so `24.0` renders as `"00:00"`.
pub fn format_hour(hour: f64) -> String {
    let total = (hour * 60.0).round() as i64;
    let minutes = total.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format an instant as local `HH:MM` in `tz`.
pub fn format_local_hm(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}
