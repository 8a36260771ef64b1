//! Company shift status handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, CompanyStatusResponse};
use crate::state::AppState;

/// GET /api/company/status
pub async fn company_status(
    State(state): State<AppState>,
) -> Json<ApiResponse<CompanyStatusResponse>> {
    let now = state.now();

    Json(ApiResponse::ok(CompanyStatusResponse {
        timezone: state.clock.timezone().name().to_string(),
        status: state.dashboard_service.company_status(now),
        generated_at: now,
    }))
}
