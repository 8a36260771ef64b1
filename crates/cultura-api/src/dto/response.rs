//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cultura_status::CompanyStatus;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

/// Company status with the zone it was computed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyStatusResponse {
    /// IANA timezone of the company.
    pub timezone: String,
    #[serde(flatten)]
    pub status: CompanyStatus,
    pub generated_at: DateTime<Utc>,
}
