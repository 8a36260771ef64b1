//! # cultura-entity
//!
//! Row models for the Cultura tables the status engine reads and writes.
//! Every struct derives `Debug`, `Clone`, `Serialize`, `Deserialize` and
//! `sqlx::FromRow`.

pub mod member;
pub mod message;
pub mod task;

pub use member::{DEFAULT_LANGUAGE, Member, NewMember, member_id_for_subject};
pub use message::Message;
pub use task::Task;
