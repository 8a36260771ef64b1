//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use cultura_service::DashboardView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardView>>, ApiError> {
    let view = state
        .dashboard_service
        .load_dashboard(&auth, auth.request_time)
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}
