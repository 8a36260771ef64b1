//! Error types for schedule construction and status declaration.

use thiserror::Error;

use cultura_core::error::{AppError, ErrorKind};

/// A shift schedule or company timezone that cannot be served.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A boundary is NaN or infinite.
    #[error("schedule boundary '{field}' is not a finite number")]
    NonFinite {
        /// Name of the offending boundary.
        field: &'static str,
    },
    /// A boundary lies outside the 0–24 hour day.
    #[error("schedule boundary '{field}' = {value} is outside 0..=24")]
    OutOfRange {
        /// Name of the offending boundary.
        field: &'static str,
        /// The configured value.
        value: f64,
    },
    /// Two consecutive boundaries are not strictly increasing.
    #[error("schedule boundary '{earlier}' ({earlier_value}) must be before '{later}' ({later_value})")]
    Unordered {
        /// The boundary that should come first.
        earlier: &'static str,
        /// Its configured value.
        earlier_value: f64,
        /// The boundary that should come second.
        later: &'static str,
        /// Its configured value.
        later_value: f64,
    },
    /// The timezone identifier is not in the IANA database.
    #[error("unknown company timezone '{0}'")]
    UnknownTimezone(String),
}

/// A custom status declaration that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The status kind string is not recognised.
    #[error("unknown status kind '{0}'")]
    UnknownKind(String),
    /// A `CUSTOM` status was declared without a message.
    #[error("a custom status requires a message")]
    MissingMessage,
    /// The custom message is longer than allowed.
    #[error("status message exceeds {max} characters")]
    MessageTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
    /// The requested duration is outside the accepted range.
    #[error("status duration {minutes} min is outside 1..={max}")]
    InvalidDuration {
        /// The requested duration.
        minutes: i64,
        /// Maximum accepted duration in minutes.
        max: i64,
    },
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid company schedule: {err}"),
            err,
        )
    }
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        AppError::with_source(ErrorKind::Validation, err.to_string(), err)
    }
}
