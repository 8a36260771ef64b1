//! Request DTOs with validation.
//!
//! Message length and duration bounds are enforced once, by
//! `CustomStatus::declare`, so the trimmed message is what gets measured.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cultura_core::error::AppError;
use cultura_service::SetStatusRequest;
use cultura_status::StatusKind;

/// PUT /api/presence/status body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetStatusBody {
    /// `PRAYER`, `LUNCH`, `SIESTA` or `CUSTOM` (case-insensitive).
    #[validate(length(min = 1, message = "Status kind is required"))]
    pub kind: String,
    /// Free text, required for `CUSTOM`.
    pub message: Option<String>,
    /// Overrides the kind's preset duration.
    pub duration_minutes: Option<i64>,
}

impl SetStatusBody {
    /// Parse into the service request.
    pub fn into_request(self) -> Result<SetStatusRequest, AppError> {
        let kind: StatusKind = self.kind.parse()?;
        Ok(SetStatusRequest {
            kind,
            message: self.message,
            duration_minutes: self.duration_minutes,
        })
    }
}
