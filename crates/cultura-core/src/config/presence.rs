//! Presence and heartbeat configuration.

use serde::{Deserialize, Serialize};

/// Presence resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// A member whose last heartbeat is younger than this is online.
    #[serde(default = "default_online_window")]
    pub online_window_seconds: u64,
    /// Interval at which clients are expected to send heartbeats.
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_seconds: u64,
    /// Maximum number of colleagues returned on the dashboard.
    #[serde(default = "default_colleague_limit")]
    pub colleague_limit: u32,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            online_window_seconds: default_online_window(),
            heartbeat_interval_seconds: default_heartbeat_interval(),
            colleague_limit: default_colleague_limit(),
        }
    }
}

fn default_online_window() -> u64 {
    300
}

fn default_heartbeat_interval() -> u64 {
    120
}

fn default_colleague_limit() -> u32 {
    50
}
