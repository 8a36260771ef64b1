//! Member entities.

pub mod model;

pub use model::{DEFAULT_LANGUAGE, MEMBER_ID_NAMESPACE, Member, NewMember, member_id_for_subject};
