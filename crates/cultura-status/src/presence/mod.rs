//! Colleague presence: declared custom statuses, heartbeat liveness, and
//! the precedence rules that merge them with the company status.

pub mod custom;
pub mod resolved;
pub mod resolver;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use custom::{CustomStatus, StatusKind};
pub use resolved::{PresenceColor, PresenceKey, PresenceLabel, ResolvedPresence, SubLabel, SubLabelKey};
pub use resolver::{DEFAULT_ONLINE_WINDOW_SECONDS, PresenceResolver, resolve_presence};

/// What the resolver needs to know about one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Last heartbeat, if the person has ever sent one.
    pub last_active_at: Option<DateTime<Utc>>,
    /// Declared custom status (possibly expired or cleared).
    #[serde(default)]
    pub custom_status: CustomStatus,
}
