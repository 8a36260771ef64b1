//! `AuthUser` extractor: reads the identity forwarded by the gateway,
//! mirrors it into the member store and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cultura_core::error::AppError;
use cultura_entity::member_id_for_subject;
use cultura_service::{GatewayIdentity, RequestContext};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the identity-provider subject (a UUID or an opaque id).
pub const USER_ID_HEADER: &str = "x-user-id";
/// Optional display name.
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Optional primary email.
pub const USER_EMAIL_HEADER: &str = "x-user-email";
/// Optional avatar URL.
pub const USER_IMAGE_HEADER: &str = "x-user-image";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let subject = header_text(parts, USER_ID_HEADER)
            .ok_or_else(|| AppError::unauthorized("Missing X-User-Id header"))?;
        let user_id = member_id_for_subject(subject)
            .ok_or_else(|| AppError::unauthorized("Invalid X-User-Id header"))?;

        let identity = GatewayIdentity {
            id: user_id,
            name: header_text(parts, USER_NAME_HEADER).map(str::to_string),
            email: header_text(parts, USER_EMAIL_HEADER).map(str::to_string),
            image_url: header_text(parts, USER_IMAGE_HEADER).map(str::to_string),
        };

        let request_time = state.now();
        state
            .member_service
            .sync_identity(identity, request_time)
            .await?;

        Ok(AuthUser(RequestContext {
            user_id,
            request_time,
        }))
    }
}

/// Trimmed UTF-8 header value; blank or absent reads as `None`.
fn header_text<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
