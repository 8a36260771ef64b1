//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{
    AuthUser, USER_EMAIL_HEADER, USER_ID_HEADER, USER_IMAGE_HEADER, USER_NAME_HEADER,
};
pub use json::ValidatedJson;
