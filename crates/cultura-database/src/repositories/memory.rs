//! In-memory member repository for single-node runs and tests.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use cultura_core::result::AppResult;
use cultura_entity::{Member, Message, NewMember, Task};
use cultura_status::CustomStatus;

use super::MemberRepository;

/// Member repository holding everything in concurrent maps.
///
/// Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryMemberRepository {
    members: Arc<DashMap<Uuid, Member>>,
    messages: Arc<DashMap<Uuid, Message>>,
    tasks: Arc<DashMap<Uuid, Task>>,
}

impl MemoryMemberRepository {
    /// An empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, replacing any row with the same id.
    pub fn insert_member(&self, member: NewMember) -> Member {
        let row = member.into_member(Utc::now());
        self.members.insert(row.id, row.clone());
        debug!(member_id = %row.id, "Member stored in memory");
        row
    }

    /// Store a chat message.
    pub fn insert_message(&self, message: Message) {
        self.messages.insert(message.id, message);
    }

    /// Store a task.
    pub fn insert_task(&self, task: Task) {
        self.tasks.insert(task.id, task);
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    async fn upsert_member(&self, member: NewMember, at: DateTime<Utc>) -> AppResult<Member> {
        let row = match self.members.entry(member.id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().merge_identity(member, at);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                debug!(member_id = %member.id, "Member registered");
                entry.insert(member.into_member(at)).value().clone()
            }
        };
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        Ok(self.members.get(&id).map(|m| m.value().clone()))
    }

    async fn fetch_colleague_presence(
        &self,
        exclude: Option<Uuid>,
        limit: u32,
    ) -> AppResult<Vec<Member>> {
        let mut rows: Vec<Member> = self
            .members
            .iter()
            .filter(|entry| Some(*entry.key()) != exclude)
            .map(|entry| entry.value().clone())
            .collect();

        // `Some(_)` sorts above `None`, so never-seen members land last.
        rows.sort_by_key(|m| (Reverse(m.last_active_at), m.id));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn touch_last_active(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<Option<Member>> {
        Ok(self.members.get_mut(&id).map(|mut entry| {
            entry.last_active_at = Some(at);
            entry.clone()
        }))
    }

    async fn save_custom_status(
        &self,
        id: Uuid,
        status: &CustomStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Member>> {
        Ok(self.members.get_mut(&id).map(|mut entry| {
            entry.apply_custom_status(status, at);
            entry.clone()
        }))
    }

    async fn count_messages_from_others(&self, id: Uuid) -> AppResult<u64> {
        Ok(self.messages.iter().filter(|m| m.sender_id != id).count() as u64)
    }

    async fn count_pending_tasks(&self, id: Uuid) -> AppResult<u64> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.user_id == id && t.is_pending())
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use cultura_status::StatusKind;

    fn new_member(name: &str) -> NewMember {
        NewMember {
            id: Uuid::new_v4(),
            name: Some(name.to_string()),
            email: None,
            image_url: None,
            language: "tr".to_string(),
        }
    }

    fn new_member_with_id(id: Uuid, name: Option<&str>) -> NewMember {
        NewMember {
            id,
            name: name.map(str::to_string),
            email: None,
            image_url: None,
            language: "tr".to_string(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_colleagues_ordered_by_recency_excluding_requester() {
        let repo = MemoryMemberRepository::new();
        let me = repo.insert_member(new_member("me"));
        let stale = repo.insert_member(new_member("stale"));
        let fresh = repo.insert_member(new_member("fresh"));
        let never = repo.insert_member(new_member("never"));

        repo.touch_last_active(me.id, t0()).await.unwrap();
        repo.touch_last_active(stale.id, t0() - Duration::hours(2)).await.unwrap();
        repo.touch_last_active(fresh.id, t0() - Duration::minutes(1)).await.unwrap();

        let rows = repo.fetch_colleague_presence(Some(me.id), 50).await.unwrap();
        let ids: Vec<Uuid> = rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![fresh.id, stale.id, never.id]);

        let limited = repo.fetch_colleague_presence(Some(me.id), 1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, fresh.id);

        let everyone = repo.fetch_colleague_presence(None, 50).await.unwrap();
        assert_eq!(everyone.len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_member_updates_return_none() {
        let repo = MemoryMemberRepository::new();
        let id = Uuid::new_v4();
        assert!(repo.touch_last_active(id, t0()).await.unwrap().is_none());
        assert!(
            repo.save_custom_status(id, &CustomStatus::cleared(), t0())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_save_and_clear_custom_status() {
        let repo = MemoryMemberRepository::new();
        let me = repo.insert_member(new_member("me"));
        let status = CustomStatus::declare(StatusKind::Siesta, None, None, t0()).unwrap();

        let saved = repo.save_custom_status(me.id, &status, t0()).await.unwrap().unwrap();
        assert_eq!(saved.custom_status.as_deref(), Some("SIESTA"));
        assert_eq!(saved.status_expires, Some(t0() + Duration::minutes(30)));

        let cleared = repo
            .save_custom_status(me.id, &CustomStatus::cleared(), t0())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.custom_status, None);
        assert_eq!(cleared.status_message, None);
        assert_eq!(cleared.status_expires, None);
    }

    #[tokio::test]
    async fn test_upsert_registers_then_refreshes_identity() {
        let repo = MemoryMemberRepository::new();
        let id = Uuid::new_v4();

        let created = repo.upsert_member(new_member_with_id(id, Some("Elif")), t0()).await.unwrap();
        assert_eq!(created.created_at, t0());
        assert_eq!(created.last_active_at, None);

        let prayer = CustomStatus::declare(StatusKind::Prayer, None, None, t0()).unwrap();
        repo.save_custom_status(id, &prayer, t0()).await.unwrap();
        repo.touch_last_active(id, t0()).await.unwrap();

        let later = t0() + Duration::minutes(5);
        let refreshed = repo.upsert_member(new_member_with_id(id, None), later).await.unwrap();
        assert_eq!(refreshed.name.as_deref(), Some("Elif"));
        assert_eq!(refreshed.created_at, t0());
        assert_eq!(refreshed.updated_at, later);
        assert_eq!(refreshed.custom_status.as_deref(), Some("PRAYER"));
        assert_eq!(refreshed.last_active_at, Some(t0()));

        let renamed = repo
            .upsert_member(new_member_with_id(id, Some("Elif Kaya")), later)
            .await
            .unwrap();
        assert_eq!(renamed.name.as_deref(), Some("Elif Kaya"));
        assert_eq!(repo.fetch_colleague_presence(None, 50).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_counters() {
        let repo = MemoryMemberRepository::new();
        let me = repo.insert_member(new_member("me"));
        let other = repo.insert_member(new_member("other"));

        repo.insert_message(Message::new(me.id, "günaydın"));
        repo.insert_message(Message::new(other.id, "merhaba"));
        repo.insert_message(Message::new(other.id, "toplantı 14:00"));

        let mut done = Task::new(me.id, "expense report");
        done.is_completed = true;
        repo.insert_task(done);
        repo.insert_task(Task::new(me.id, "prepare slides"));
        repo.insert_task(Task::new(other.id, "not mine"));

        assert_eq!(repo.count_messages_from_others(me.id).await.unwrap(), 2);
        assert_eq!(repo.count_pending_tasks(me.id).await.unwrap(), 1);
    }
}
