//! # cultura-api
//!
//! HTTP API layer for Cultura built on Axum.
//!
//! Provides the dashboard and presence endpoints, the gateway identity
//! extractor, CORS and request logging middleware, DTOs, and the mapping
//! from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::{AppState, TimeSource};
