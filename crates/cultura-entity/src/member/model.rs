//! Member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use cultura_status::{CustomStatus, PresenceRecord, StatusKind};

/// Language assigned to members the gateway registers.
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Namespace for deriving member ids from identity-provider subjects that
/// are not UUIDs (for example `user_2abc...`).
pub const MEMBER_ID_NAMESPACE: Uuid = Uuid::from_u128(0x3f0c_9a6e_52d1_4b8e_9c57_1e2a_7d40_b6f3);

/// Map an identity-provider subject to a member id.
///
/// UUID subjects are used as-is; any other non-blank subject maps to a
/// stable v5 UUID in [`MEMBER_ID_NAMESPACE`]. Blank subjects yield `None`.
pub fn member_id_for_subject(subject: &str) -> Option<Uuid> {
    let subject = subject.trim();
    if subject.is_empty() {
        return None;
    }
    Some(
        Uuid::parse_str(subject)
            .unwrap_or_else(|_| Uuid::new_v5(&MEMBER_ID_NAMESPACE, subject.as_bytes())),
    )
}

/// An employee account, as stored in the `members` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Identity-provider user id.
    pub id: Uuid,
    /// Display name.
    pub name: Option<String>,
    /// Primary email address.
    pub email: Option<String>,
    /// Avatar URL.
    pub image_url: Option<String>,
    /// Preferred UI language code.
    pub language: String,
    /// Declared status kind (`PRAYER`, `LUNCH`, `SIESTA`, `CUSTOM`).
    pub custom_status: Option<String>,
    /// Free text for `CUSTOM` statuses.
    pub status_message: Option<String>,
    /// When the declared status stops applying.
    pub status_expires: Option<DateTime<Utc>>,
    /// Last heartbeat.
    pub last_active_at: Option<DateTime<Utc>>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// The declared status. An unrecognised kind string reads as no status.
    pub fn custom_status(&self) -> CustomStatus {
        let kind = self.custom_status.as_deref().and_then(|raw| {
            raw.parse::<StatusKind>()
                .map_err(|e| {
                    tracing::warn!(member_id = %self.id, error = %e, "Ignoring unreadable custom status");
                })
                .ok()
        });

        match kind {
            Some(kind) => CustomStatus {
                kind: Some(kind),
                message: self.status_message.clone(),
                expires_at: self.status_expires,
            },
            None => CustomStatus::cleared(),
        }
    }

    /// Overwrite the status columns with `status`.
    pub fn apply_custom_status(&mut self, status: &CustomStatus, at: DateTime<Utc>) {
        self.custom_status = status.kind.map(|kind| kind.as_str().to_string());
        self.status_message = status.message.clone();
        self.status_expires = status.expires_at;
        self.updated_at = at;
    }

    /// The presence resolver's view of this member.
    pub fn to_presence_record(&self) -> PresenceRecord {
        PresenceRecord {
            last_active_at: self.last_active_at,
            custom_status: self.custom_status(),
        }
    }

    /// Refresh identity fields from the gateway. Absent values keep what is
    /// stored; language and status are never touched.
    pub fn merge_identity(&mut self, identity: NewMember, at: DateTime<Utc>) {
        if identity.name.is_some() {
            self.name = identity.name;
        }
        if identity.email.is_some() {
            self.email = identity.email;
        }
        if identity.image_url.is_some() {
            self.image_url = identity.image_url;
        }
        self.updated_at = at;
    }

    /// Name for listings, falling back to email, then the id.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Data required to register a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub language: String,
}

impl NewMember {
    /// Materialize the row as it looks right after insertion.
    pub fn into_member(self, at: DateTime<Utc>) -> Member {
        Member {
            id: self.id,
            name: self.name,
            email: self.email,
            image_url: self.image_url,
            language: self.language,
            custom_status: None,
            status_message: None,
            status_expires: None,
            last_active_at: None,
            created_at: at,
            updated_at: at,
        }
    }
}
