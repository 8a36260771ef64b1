//! User-declared, time-bounded custom statuses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// Longest accepted free-text status message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 140;

/// Longest accepted status duration, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 8 * 60;

/// Kind of declared break or custom message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    /// Prayer break.
    Prayer,
    /// Lunch break.
    Lunch,
    /// Siesta.
    Siesta,
    /// Free-text message.
    Custom,
}

impl StatusKind {
    /// Stable key string, also the persisted column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prayer => "PRAYER",
            Self::Lunch => "LUNCH",
            Self::Siesta => "SIESTA",
            Self::Custom => "CUSTOM",
        }
    }

    /// Duration used when the caller does not supply one.
    pub fn default_duration_minutes(&self) -> i64 {
        match self {
            Self::Prayer => 15,
            Self::Lunch => 60,
            Self::Siesta | Self::Custom => 30,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusKind {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PRAYER" => Ok(Self::Prayer),
            "LUNCH" => Ok(Self::Lunch),
            "SIESTA" => Ok(Self::Siesta),
            "CUSTOM" => Ok(Self::Custom),
            _ => Err(StatusError::UnknownKind(s.to_string())),
        }
    }
}

/// A declared status with its expiry.
///
/// Expiry is lazy: once `expires_at` has passed the status is inactive, but
/// the fields stay as they were until the next explicit set or clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStatus {
    /// Status kind; `None` when cleared.
    pub kind: Option<StatusKind>,
    /// Free text, present for `CUSTOM`.
    pub message: Option<String>,
    /// When the status stops applying.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CustomStatus {
    /// Declare a status starting at `now`.
    ///
    /// `duration_minutes` overrides the kind's preset; it must lie in
    /// `1..=MAX_DURATION_MINUTES`. `CUSTOM` requires a non-blank message,
    /// other kinds ignore it.
    pub fn declare(
        kind: StatusKind,
        message: Option<&str>,
        duration_minutes: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Self, StatusError> {
        let minutes = duration_minutes.unwrap_or_else(|| kind.default_duration_minutes());
        if !(1..=MAX_DURATION_MINUTES).contains(&minutes) {
            return Err(StatusError::InvalidDuration {
                minutes,
                max: MAX_DURATION_MINUTES,
            });
        }

        let message = match kind {
            StatusKind::Custom => {
                let text = message.map(str::trim).unwrap_or_default();
                if text.is_empty() {
                    return Err(StatusError::MissingMessage);
                }
                if text.chars().count() > MAX_MESSAGE_CHARS {
                    return Err(StatusError::MessageTooLong {
                        max: MAX_MESSAGE_CHARS,
                    });
                }
                Some(text.to_string())
            }
            _ => None,
        };

        Ok(Self {
            kind: Some(kind),
            message,
            expires_at: Some(now + Duration::minutes(minutes)),
        })
    }

    /// A cleared status: kind, message and expiry all unset.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether the status still applies at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.kind.is_some() && self.expires_at.is_some_and(|expires| expires > now)
    }
}
