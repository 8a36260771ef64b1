//! PostgreSQL member repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use cultura_core::error::{AppError, ErrorKind};
use cultura_core::result::AppResult;
use cultura_entity::{Member, NewMember};
use cultura_status::CustomStatus;

use super::MemberRepository;

/// Member repository backed by the `members`, `messages` and `tasks` tables.
#[derive(Debug, Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                warn!(error = %e, "Database health check failed");
                AppError::service_unavailable("Database unreachable")
            })
    }

    async fn upsert_member(&self, member: NewMember, at: DateTime<Utc>) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, name, email, image_url, language, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = COALESCE(EXCLUDED.name, members.name), \
                 email = COALESCE(EXCLUDED.email, members.email), \
                 image_url = COALESCE(EXCLUDED.image_url, members.image_url), \
                 updated_at = EXCLUDED.updated_at \
             RETURNING *",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.image_url)
        .bind(&member.language)
        .bind(at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert member", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find member by id", e)
            })
    }

    async fn fetch_colleague_presence(
        &self,
        exclude: Option<Uuid>,
        limit: u32,
    ) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members \
             WHERE ($1::uuid IS NULL OR id <> $1) \
             ORDER BY last_active_at DESC NULLS LAST, id \
             LIMIT $2",
        )
        .bind(exclude)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch colleague presence", e)
        })
    }

    async fn touch_last_active(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET last_active_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record heartbeat", e))
    }

    async fn save_custom_status(
        &self,
        id: Uuid,
        status: &CustomStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "UPDATE members \
             SET custom_status = $2, status_message = $3, status_expires = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.kind.map(|kind| kind.as_str()))
        .bind(status.message.as_deref())
        .bind(status.expires_at)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to save custom status", e)
        })
    }

    async fn count_messages_from_others(&self, id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE sender_id <> $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count messages", e))?;
        Ok(count.max(0) as u64)
    }

    async fn count_pending_tasks(&self, id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND is_completed = FALSE",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending tasks", e)
        })?;
        Ok(count.max(0) as u64)
    }
}
