//! The four-rule presence precedence chain.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use super::PresenceRecord;
use super::custom::StatusKind;
use super::resolved::{PresenceColor, PresenceKey, PresenceLabel, ResolvedPresence, SubLabel};
use crate::shift::CompanyStatus;
use crate::time::format_local_hm;

/// Liveness window used when none is configured.
pub const DEFAULT_ONLINE_WINDOW_SECONDS: u64 = 300;

/// Resolve one person's presence at `now`. The first matching rule wins:
///
/// 1. an active custom status (kind set and `expires_at > now`);
/// 2. a heartbeat younger than `online_window`;
/// 3. company off hours (gray);
/// 4. otherwise "working".
///
/// A missing heartbeat or company status never fails; both fall through to
/// rule 4.
pub fn resolve_presence(
    person: &PresenceRecord,
    company: Option<&CompanyStatus>,
    now: DateTime<Utc>,
    tz: Tz,
    online_window: Duration,
) -> ResolvedPresence {
    let status = &person.custom_status;
    if let (Some(kind), Some(expires_at)) = (status.kind, status.expires_at) {
        if expires_at > now {
            let label = match (kind, status.message.as_deref()) {
                (StatusKind::Custom, Some(message)) if !message.trim().is_empty() => {
                    PresenceLabel::Text(message.to_string())
                }
                _ => PresenceLabel::Key(PresenceKey::from(kind)),
            };
            return ResolvedPresence {
                label,
                color_tag: PresenceColor::Purple,
                sub_label: SubLabel::back_at(format_local_hm(expires_at, tz)),
            };
        }
    }

    if let Some(last_active) = person.last_active_at {
        if now.signed_duration_since(last_active) < online_window {
            return ResolvedPresence::active_in_app();
        }
    }

    match company {
        Some(company) if company.color_tag.is_off_hours() => ResolvedPresence::off_duty(),
        _ => ResolvedPresence::working(),
    }
}

/// Company timezone and liveness window, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceResolver {
    timezone: Tz,
    online_window: Duration,
}

impl PresenceResolver {
    pub fn new(timezone: Tz, online_window_seconds: u64) -> Self {
        let online_window = i64::try_from(online_window_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self {
            timezone,
            online_window,
        }
    }

    pub fn online_window(&self) -> Duration {
        self.online_window
    }

    pub fn resolve(
        &self,
        person: &PresenceRecord,
        company: Option<&CompanyStatus>,
        now: DateTime<Utc>,
    ) -> ResolvedPresence {
        resolve_presence(person, company, now, self.timezone, self.online_window)
    }
}
