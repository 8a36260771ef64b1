//! Heartbeat and custom status handlers.

use axum::Json;
use axum::extract::State;

use cultura_service::{HeartbeatAck, StatusView};

use crate::dto::request::SetStatusBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/presence/heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<HeartbeatAck>>, ApiError> {
    let ack = state
        .status_service
        .heartbeat(&auth, auth.request_time)
        .await?;

    Ok(Json(ApiResponse::ok(ack)))
}

/// PUT /api/presence/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<SetStatusBody>,
) -> Result<Json<ApiResponse<StatusView>>, ApiError> {
    let view = state
        .status_service
        .set_status(&auth, body.into_request()?, auth.request_time)
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// DELETE /api/presence/status
pub async fn clear_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<StatusView>>, ApiError> {
    let view = state
        .status_service
        .clear_status(&auth, auth.request_time)
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}
