//! Dashboard view: company status, own and colleague presence, counters.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use cultura_core::error::AppError;
use cultura_database::MemberRepository;
use cultura_entity::Member;
use cultura_status::{CompanyStatus, PresenceResolver, ResolvedPresence, ShiftClock};

use crate::context::RequestContext;

/// One colleague row on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ColleaguePresence {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub last_active_at: Option<DateTime<Utc>>,
    pub presence: ResolvedPresence,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub member: Member,
    pub company_status: CompanyStatus,
    pub my_presence: ResolvedPresence,
    pub colleagues: Vec<ColleaguePresence>,
    pub message_count: u64,
    pub pending_task_count: u64,
    pub generated_at: DateTime<Utc>,
}

/// Assembles the dashboard for the calling member.
#[derive(Debug, Clone)]
pub struct DashboardService {
    repo: Arc<dyn MemberRepository>,
    clock: ShiftClock,
    resolver: PresenceResolver,
    colleague_limit: u32,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        repo: Arc<dyn MemberRepository>,
        clock: ShiftClock,
        resolver: PresenceResolver,
        colleague_limit: u32,
    ) -> Self {
        Self {
            repo,
            clock,
            resolver,
            colleague_limit,
        }
    }

    /// Company status at `now`. Recomputed on every call.
    pub fn company_status(&self, now: DateTime<Utc>) -> CompanyStatus {
        self.clock.status_at_instant(now)
    }

    /// Build the dashboard for `ctx.user_id` as of `now`.
    pub async fn load_dashboard(
        &self,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Result<DashboardView, AppError> {
        let member = self
            .repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;

        let company_status = self.company_status(now);
        let my_presence = self
            .resolver
            .resolve(&member.to_presence_record(), Some(&company_status), now);

        let colleagues = self
            .list_presence(Some(ctx.user_id), self.colleague_limit, &company_status, now)
            .await?;

        let message_count = self.repo.count_messages_from_others(ctx.user_id).await?;
        let pending_task_count = self.repo.count_pending_tasks(ctx.user_id).await?;

        debug!(
            user_id = %ctx.user_id,
            state = %company_status.state,
            colleagues = colleagues.len(),
            "Dashboard assembled"
        );

        Ok(DashboardView {
            member,
            company_status,
            my_presence,
            colleagues,
            message_count,
            pending_task_count,
            generated_at: now,
        })
    }

    /// Resolve presence for up to `limit` members, most recently active
    /// first, optionally skipping one member.
    pub async fn list_presence(
        &self,
        exclude: Option<Uuid>,
        limit: u32,
        company_status: &CompanyStatus,
        now: DateTime<Utc>,
    ) -> Result<Vec<ColleaguePresence>, AppError> {
        let rows = self.repo.fetch_colleague_presence(exclude, limit).await?;

        Ok(rows
            .into_iter()
            .map(|m| ColleaguePresence {
                presence: self
                    .resolver
                    .resolve(&m.to_presence_record(), Some(company_status), now),
                name: m.display_name(),
                id: m.id,
                image_url: m.image_url,
                last_active_at: m.last_active_at,
            })
            .collect())
    }
}
