//! Heartbeat and custom status actions.

pub mod service;

pub use service::{HeartbeatAck, SetStatusRequest, StatusService, StatusView};
