//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use cultura_core::config::AppConfig;
use cultura_core::error::AppError;
use cultura_database::MemberRepository;
use cultura_service::{DashboardService, MemberService, StatusService};
use cultura_status::{PresenceResolver, ShiftClock};

/// Where handlers read the current instant from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// The host system clock.
    System,
    /// A frozen instant, for tests and previews.
    Fixed(DateTime<Utc>),
}

impl TimeSource {
    /// The current instant.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }
}

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped or `Copy` for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Company timezone and schedule
    pub clock: ShiftClock,
    /// Clock used for every computation in a request
    pub time: TimeSource,
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Gateway identity sync and store health
    pub member_service: Arc<MemberService>,
    /// Dashboard assembly
    pub dashboard_service: Arc<DashboardService>,
    /// Heartbeat and custom status actions
    pub status_service: Arc<StatusService>,
}

impl AppState {
    /// Wire services from configuration. Fails if the company schedule or
    /// timezone is invalid, so nothing is served with a broken clock.
    pub fn new(
        config: AppConfig,
        member_repo: Arc<dyn MemberRepository>,
        time: TimeSource,
    ) -> Result<Self, AppError> {
        let clock = ShiftClock::from_config(&config.company)?;
        let resolver =
            PresenceResolver::new(clock.timezone(), config.presence.online_window_seconds);

        let member_service = Arc::new(MemberService::new(Arc::clone(&member_repo)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&member_repo),
            clock,
            resolver,
            config.presence.colleague_limit,
        ));
        let status_service = Arc::new(StatusService::new(
            member_repo,
            clock,
            resolver,
            config.presence.heartbeat_interval_seconds,
        ));

        Ok(Self {
            config: Arc::new(config),
            clock,
            time,
            started_at: time.now(),
            member_service,
            dashboard_service,
            status_service,
        })
    }

    /// The current instant according to this state's time source.
    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }
}
