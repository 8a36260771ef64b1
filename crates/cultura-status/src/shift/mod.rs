//! Company shift clock.
//!
//! The company day is split into five half-open intervals by a
//! [`ShiftSchedule`]; [`compute_company_status`] places an instant into
//! exactly one of them.

pub mod clock;
pub mod schedule;
pub mod state;

pub use clock::{ShiftClock, compute_company_status};
pub use schedule::ShiftSchedule;
pub use state::{CompanyColor, CompanyStatus, NextLabelKey, ShiftState};
