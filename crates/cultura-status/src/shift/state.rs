//! Shift state enumeration and the derived company status value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five mutually exclusive phases of the company day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftState {
    /// Before the shift starts.
    BeforeShift,
    /// Between shift start and lunch.
    Morning,
    /// Lunch break.
    Lunch,
    /// Between lunch and shift end.
    Afternoon,
    /// After the shift ends.
    AfterShift,
}

impl ShiftState {
    /// Stable key for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeShift => "BEFORE_SHIFT",
            Self::Morning => "MORNING",
            Self::Lunch => "LUNCH",
            Self::Afternoon => "AFTERNOON",
            Self::AfterShift => "AFTER_SHIFT",
        }
    }

    /// Label key describing the next transition out of this state.
    pub fn next_label_key(&self) -> NextLabelKey {
        match self {
            Self::BeforeShift | Self::AfterShift => NextLabelKey::AwaitStart,
            Self::Morning => NextLabelKey::AwaitLunch,
            Self::Lunch => NextLabelKey::AwaitReturn,
            Self::Afternoon => NextLabelKey::AwaitEnd,
        }
    }

    /// Display color for this state.
    pub fn color(&self) -> CompanyColor {
        match self {
            Self::BeforeShift | Self::AfterShift => CompanyColor::Gray,
            Self::Morning => CompanyColor::Blue,
            Self::Lunch => CompanyColor::Orange,
            Self::Afternoon => CompanyColor::Green,
        }
    }
}

impl fmt::Display for ShiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Localization key for the "next event" caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextLabelKey {
    /// Waiting for the shift to start.
    AwaitStart,
    /// Waiting for lunch.
    AwaitLunch,
    /// Waiting for the return from lunch.
    AwaitReturn,
    /// Waiting for the shift to end.
    AwaitEnd,
}

impl NextLabelKey {
    /// Stable key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitStart => "AWAIT_START",
            Self::AwaitLunch => "AWAIT_LUNCH",
            Self::AwaitReturn => "AWAIT_RETURN",
            Self::AwaitEnd => "AWAIT_END",
        }
    }
}

/// Color tag for the company status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyColor {
    /// Off hours.
    Gray,
    /// Morning block.
    Blue,
    /// Lunch break.
    Orange,
    /// Afternoon block.
    Green,
}

impl CompanyColor {
    /// Whether the company is outside working hours.
    pub fn is_off_hours(&self) -> bool {
        matches!(self, Self::Gray)
    }

    /// Lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

/// Where the company currently is in its daily schedule.
///
/// Recomputed on every read; never persisted or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStatus {
    /// Current shift state.
    pub state: ShiftState,
    /// Next boundary as local `HH:MM`.
    pub next_boundary_time: String,
    /// Caption key for the next boundary.
    pub next_label_key: NextLabelKey,
    /// Progress through the current interval, `0..=100`.
    pub progress_percent: u8,
    /// Display color.
    pub color_tag: CompanyColor,
}
