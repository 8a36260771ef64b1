//! Mirrors the identity forwarded by the gateway into the member store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use cultura_core::error::AppError;
use cultura_database::MemberRepository;
use cultura_entity::{DEFAULT_LANGUAGE, Member, NewMember};

/// Caller identity as asserted by the upstream identity gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayIdentity {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

/// Keeps the `members` table in step with the identity provider.
#[derive(Debug, Clone)]
pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    /// Register the caller on first sight, refresh their profile fields
    /// afterwards.
    pub async fn sync_identity(
        &self,
        identity: GatewayIdentity,
        now: DateTime<Utc>,
    ) -> Result<Member, AppError> {
        let member = self
            .repo
            .upsert_member(
                NewMember {
                    id: identity.id,
                    name: identity.name,
                    email: identity.email,
                    image_url: identity.image_url,
                    language: DEFAULT_LANGUAGE.to_string(),
                },
                now,
            )
            .await?;

        debug!(member_id = %member.id, "Member identity synced");
        Ok(member)
    }

    /// Whether the member store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repo.health_check().await
    }
}
