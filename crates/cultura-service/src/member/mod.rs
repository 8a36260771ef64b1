//! Member identity sync.

pub mod service;

pub use service::{GatewayIdentity, MemberService};
