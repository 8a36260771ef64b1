//! # cultura-status
//!
//! The status engine behind the Cultura dashboard:
//!
//! - [`shift`] maps the current instant, in the fixed company timezone, to
//!   one of five shift states with a progress percentage and the next
//!   transition.
//! - [`presence`] layers a colleague's declared custom status and heartbeat
//!   liveness on top of the company status to produce one displayable state.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! caching. Outputs carry stable keys; localization happens in the
//! presentation layer.

pub mod error;
pub mod presence;
pub mod shift;
pub mod time;

pub use error::{ScheduleError, StatusError};
pub use presence::{
    CustomStatus, PresenceColor, PresenceKey, PresenceLabel, PresenceRecord, PresenceResolver,
    ResolvedPresence, StatusKind, SubLabel, SubLabelKey, resolve_presence,
};
pub use shift::{
    CompanyColor, CompanyStatus, NextLabelKey, ShiftClock, ShiftSchedule, ShiftState,
    compute_company_status,
};
