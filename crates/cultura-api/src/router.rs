//! Route definitions for the Cultura HTTP API.
//!
//! All routes are mounted under `/api` and receive `AppState` through
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with request logging, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(company_routes())
        .merge(dashboard_routes())
        .merge(presence_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Company shift status (public)
fn company_routes() -> Router<AppState> {
    Router::new().route("/company/status", get(handlers::company::company_status))
}

/// Dashboard view for the caller
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::get_dashboard))
}

/// Heartbeat and custom status
fn presence_routes() -> Router<AppState> {
    Router::new()
        .route("/presence/heartbeat", post(handlers::presence::heartbeat))
        .route(
            "/presence/status",
            put(handlers::presence::set_status).delete(handlers::presence::clear_status),
        )
}
