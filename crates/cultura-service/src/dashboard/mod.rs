//! Dashboard assembly.

pub mod service;

pub use service::{ColleaguePresence, DashboardService, DashboardView};
