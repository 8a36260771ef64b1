//! Presence actions: heartbeat, set status, clear status.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use cultura_core::error::AppError;
use cultura_database::MemberRepository;
use cultura_entity::Member;
use cultura_status::{CustomStatus, PresenceResolver, ResolvedPresence, ShiftClock, StatusKind};

use crate::context::RequestContext;

/// Input for declaring a custom status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusRequest {
    pub kind: StatusKind,
    pub message: Option<String>,
    /// Overrides the kind's preset duration.
    pub duration_minutes: Option<i64>,
}

/// Response to a heartbeat.
#[derive(Debug, Clone, Serialize)]
pub struct HeartbeatAck {
    pub last_active_at: DateTime<Utc>,
    /// When the client should call again.
    pub next_heartbeat_in_seconds: u64,
}

/// The caller's status after a set or clear.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub custom_status: CustomStatus,
    pub presence: ResolvedPresence,
}

/// Writes heartbeats and custom statuses for the calling member.
#[derive(Debug, Clone)]
pub struct StatusService {
    repo: Arc<dyn MemberRepository>,
    clock: ShiftClock,
    resolver: PresenceResolver,
    heartbeat_interval_seconds: u64,
}

impl StatusService {
    /// Creates a new status service.
    pub fn new(
        repo: Arc<dyn MemberRepository>,
        clock: ShiftClock,
        resolver: PresenceResolver,
        heartbeat_interval_seconds: u64,
    ) -> Self {
        Self {
            repo,
            clock,
            resolver,
            heartbeat_interval_seconds,
        }
    }

    /// Record that the caller's client is open at `now`.
    pub async fn heartbeat(
        &self,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Result<HeartbeatAck, AppError> {
        self.repo
            .touch_last_active(ctx.user_id, now)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;

        Ok(HeartbeatAck {
            last_active_at: now,
            next_heartbeat_in_seconds: self.heartbeat_interval_seconds,
        })
    }

    /// Declare a custom status starting at `now`.
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        req: SetStatusRequest,
        now: DateTime<Utc>,
    ) -> Result<StatusView, AppError> {
        let status =
            CustomStatus::declare(req.kind, req.message.as_deref(), req.duration_minutes, now)?;

        let member = self.save(ctx, &status, now).await?;

        info!(
            user_id = %ctx.user_id,
            kind = %req.kind,
            expires_at = ?status.expires_at,
            "Custom status set"
        );

        Ok(self.view(&member, now))
    }

    /// Remove the caller's custom status.
    pub async fn clear_status(
        &self,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Result<StatusView, AppError> {
        let member = self.save(ctx, &CustomStatus::cleared(), now).await?;

        info!(user_id = %ctx.user_id, "Custom status cleared");

        Ok(self.view(&member, now))
    }

    async fn save(
        &self,
        ctx: &RequestContext,
        status: &CustomStatus,
        now: DateTime<Utc>,
    ) -> Result<Member, AppError> {
        self.repo
            .save_custom_status(ctx.user_id, status, now)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    fn view(&self, member: &Member, now: DateTime<Utc>) -> StatusView {
        let company = self.clock.status_at_instant(now);
        let record = member.to_presence_record();
        StatusView {
            presence: self.resolver.resolve(&record, Some(&company), now),
            custom_status: record.custom_status,
        }
    }
}
