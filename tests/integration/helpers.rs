//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, TimeZone, Utc};
use http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use cultura_api::{AppState, TimeSource, build_app};
use cultura_core::config::AppConfig;
use cultura_database::MemoryMemberRepository;
use cultura_entity::{Member, NewMember};

/// Test application context
pub struct TestApp {
    /// The Axum app under test
    pub router: Router,
    /// Backing store, for seeding and direct inspection
    pub repo: Arc<MemoryMemberRepository>,
    /// The frozen instant every request sees
    pub now: DateTime<Utc>,
}

impl TestApp {
    /// App with default configuration, frozen at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::with_config(AppConfig::default(), now)
    }

    /// App with a custom configuration, frozen at `now`.
    pub fn with_config(config: AppConfig, now: DateTime<Utc>) -> Self {
        let repo = Arc::new(MemoryMemberRepository::new());
        let state = AppState::new(config, repo.clone(), TimeSource::Fixed(now))
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            repo,
            now,
        }
    }

    /// Register a member with the given display name.
    pub fn seed_member(&self, name: &str) -> Member {
        self.repo.insert_member(NewMember {
            id: Uuid::new_v4(),
            name: Some(name.to_string()),
            email: Some(format!("{}@cultura.test", name.to_lowercase())),
            image_url: None,
            language: "tr".to_string(),
        })
    }

    /// Send a JSON request and decode the JSON body (Null when empty).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        user: Option<Uuid>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let headers: Vec<(&str, String)> = user
            .map(|id| vec![("x-user-id", id.to_string())])
            .unwrap_or_default();
        self.send(method, path, &headers, body.map(|json| json.to_string()))
            .await
    }

    /// Send a request with arbitrary headers and a raw JSON body.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, String)],
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, value.as_str());
        }
        let request = match body {
            Some(raw) => builder
                .header("content-type", "application/json")
                .body(Body::from(raw)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response is not JSON")
        };

        (status, json)
    }

    pub async fn get(&self, path: &str, user: Option<Uuid>) -> (StatusCode, Value) {
        self.request(Method::GET, path, user, None).await
    }
}

/// A UTC instant on 2026-10-19.
pub fn utc(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, hour, minute, 0).unwrap()
}
