//! # cultura-database
//!
//! PostgreSQL connection management, migrations, and the
//! [`MemberRepository`](repositories::MemberRepository) port with its
//! PostgreSQL and in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemberRepository, MemoryMemberRepository, PgMemberRepository};
