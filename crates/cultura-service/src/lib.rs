//! # cultura-service
//!
//! Application use cases for the Cultura dashboard: syncing the caller's
//! identity, assembling the dashboard view and the presence actions
//! (heartbeat, set and clear custom status).
//!
//! Services follow constructor injection: the repository arrives as an
//! `Arc<dyn MemberRepository>`, the clock and resolver by value.

pub mod context;
pub mod dashboard;
pub mod member;
pub mod status;

pub use context::RequestContext;
pub use dashboard::{ColleaguePresence, DashboardService, DashboardView};
pub use member::{GatewayIdentity, MemberService};
pub use status::{HeartbeatAck, SetStatusRequest, StatusService, StatusView};
