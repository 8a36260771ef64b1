//! The member repository port and its implementations.

pub mod member;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use cultura_core::result::AppResult;
use cultura_entity::{Member, NewMember};
use cultura_status::CustomStatus;

pub use member::PgMemberRepository;
pub use memory::MemoryMemberRepository;

/// Everything the status engine reads from or writes to persistence.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait MemberRepository: Send + Sync + std::fmt::Debug {
    /// Verify the store is reachable.
    async fn health_check(&self) -> AppResult<()>;

    /// Insert the member, or refresh the identity fields of an existing row.
    /// Status, heartbeat and language are left as they are.
    async fn upsert_member(&self, member: NewMember, at: DateTime<Utc>) -> AppResult<Member>;

    /// Find a member by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>>;

    /// Members ordered by most recent heartbeat (never-seen members last),
    /// skipping `exclude` when given, at most `limit` rows.
    async fn fetch_colleague_presence(
        &self,
        exclude: Option<Uuid>,
        limit: u32,
    ) -> AppResult<Vec<Member>>;

    /// Record a heartbeat. Returns the updated row, or `None` if the member
    /// does not exist.
    async fn touch_last_active(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<Option<Member>>;

    /// Overwrite the member's custom status columns. Returns the updated row,
    /// or `None` if the member does not exist.
    async fn save_custom_status(
        &self,
        id: Uuid,
        status: &CustomStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Member>>;

    /// Number of chat messages sent by anyone other than `id`.
    async fn count_messages_from_others(&self, id: Uuid) -> AppResult<u64>;

    /// Number of `id`'s tasks not yet completed.
    async fn count_pending_tasks(&self, id: Uuid) -> AppResult<u64>;
}
