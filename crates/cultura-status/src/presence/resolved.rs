//! Render-ready presence values. Everything is a stable key; the
//! presentation layer localizes.

use serde::{Deserialize, Serialize};

use super::custom::StatusKind;

/// Localization key for a presence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresenceKey {
    Prayer,
    Lunch,
    Siesta,
    Custom,
    ActiveInApp,
    OffDuty,
    Working,
}

impl PresenceKey {
    /// Stable key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prayer => "PRAYER",
            Self::Lunch => "LUNCH",
            Self::Siesta => "SIESTA",
            Self::Custom => "CUSTOM",
            Self::ActiveInApp => "ACTIVE_IN_APP",
            Self::OffDuty => "OFF_DUTY",
            Self::Working => "WORKING",
        }
    }
}

impl From<StatusKind> for PresenceKey {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Prayer => Self::Prayer,
            StatusKind::Lunch => Self::Lunch,
            StatusKind::Siesta => Self::Siesta,
            StatusKind::Custom => Self::Custom,
        }
    }
}

/// Either a key to localize or user-entered free text.
///
/// Serializes as `{"key": "PRAYER"}` or `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceLabel {
    Key(PresenceKey),
    Text(String),
}

impl PresenceLabel {
    /// The key, if this label is not free text.
    pub fn key(&self) -> Option<PresenceKey> {
        match self {
            Self::Key(key) => Some(*key),
            Self::Text(_) => None,
        }
    }

    /// Plain string form: the key string or the free text itself.
    pub fn as_display(&self) -> &str {
        match self {
            Self::Key(key) => key.as_str(),
            Self::Text(text) => text,
        }
    }
}

/// Color tag for a presence row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceColor {
    /// Declared custom status.
    Purple,
    /// Online.
    Green,
    /// Offline during working hours.
    Blue,
    /// Offline outside working hours.
    Slate,
}

impl PresenceColor {
    /// Lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Slate => "slate",
        }
    }
}

/// Localization key for the secondary caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubLabelKey {
    BackAt,
    Online,
    Offline,
    Busy,
}

impl SubLabelKey {
    /// Stable key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackAt => "BACK_AT",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Busy => "BUSY",
        }
    }
}

/// Secondary caption, with a local `HH:MM` for `BACK_AT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLabel {
    pub key: SubLabelKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl SubLabel {
    /// Caption without a time.
    pub fn plain(key: SubLabelKey) -> Self {
        Self { key, time: None }
    }

    /// "Back at" caption.
    pub fn back_at(time: impl Into<String>) -> Self {
        Self {
            key: SubLabelKey::BackAt,
            time: Some(time.into()),
        }
    }
}

/// One person's displayable presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPresence {
    pub label: PresenceLabel,
    pub color_tag: PresenceColor,
    pub sub_label: SubLabel,
}

impl ResolvedPresence {
    pub(crate) fn active_in_app() -> Self {
        Self {
            label: PresenceLabel::Key(PresenceKey::ActiveInApp),
            color_tag: PresenceColor::Green,
            sub_label: SubLabel::plain(SubLabelKey::Online),
        }
    }

    pub(crate) fn off_duty() -> Self {
        Self {
            label: PresenceLabel::Key(PresenceKey::OffDuty),
            color_tag: PresenceColor::Slate,
            sub_label: SubLabel::plain(SubLabelKey::Offline),
        }
    }

    /// The fallback when nothing better is known.
    pub fn working() -> Self {
        Self {
            label: PresenceLabel::Key(PresenceKey::Working),
            color_tag: PresenceColor::Blue,
            sub_label: SubLabel::plain(SubLabelKey::Busy),
        }
    }
}
