//! Company status and presence action endpoints.

mod helpers;

use chrono::Duration;
use http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use cultura_core::config::AppConfig;
use cultura_database::MemberRepository;
use cultura_entity::member_id_for_subject;
use helpers::{TestApp, utc};

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::at(utc(9, 30));
    let (status, body) = app.get("/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_company_status_at_half_past_noon_istanbul() {
    // 09:30 UTC == 12:30 Europe/Istanbul
    let app = TestApp::at(utc(9, 30));
    let (status, body) = app.get("/api/company/status", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["timezone"], "Europe/Istanbul");
    assert_eq!(data["state"], "LUNCH");
    assert_eq!(data["next_boundary_time"], "13:00");
    assert_eq!(data["next_label_key"], "AWAIT_RETURN");
    assert_eq!(data["progress_percent"], 50);
    assert_eq!(data["color_tag"], "orange");
}

#[tokio::test]
async fn test_company_status_follows_configured_zone() {
    let mut config = AppConfig::default();
    config.company.timezone = "Europe/Warsaw".to_string();
    // 09:30 UTC in October == 11:30 Warsaw (CEST)
    let app = TestApp::with_config(config, utc(9, 30));

    let (_, body) = app.get("/api/company/status", None).await;
    assert_eq!(body["data"]["state"], "MORNING");
    assert_eq!(body["data"]["next_boundary_time"], "12:00");
}

#[tokio::test]
async fn test_invalid_schedule_refuses_to_build() {
    let mut config = AppConfig::default();
    config.company.schedule.lunch_start = 14.0;

    let result = cultura_api::AppState::new(
        config,
        std::sync::Arc::new(cultura_database::MemoryMemberRepository::new()),
        cultura_api::TimeSource::System,
    );
    assert_eq!(
        result.unwrap_err().kind,
        cultura_core::error::ErrorKind::Configuration
    );
}

#[tokio::test]
async fn test_heartbeat_requires_identity() {
    let app = TestApp::at(utc(7, 0));

    let (status, body) = app
        .request(Method::POST, "/api/presence/heartbeat", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");

    let (status, _) = app.get("/api/dashboard", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_identity_is_unauthorized() {
    let app = TestApp::at(utc(7, 0));
    let (status, body) = app
        .send(Method::GET, "/api/dashboard", &[("x-user-id", "   ".to_string())], None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_provider_subject_maps_to_stable_member() {
    let app = TestApp::at(utc(7, 0));
    let headers = [("x-user-id", "user_2abcDEF123".to_string())];

    let (status, first) = app
        .send(Method::POST, "/api/presence/heartbeat", &headers, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, second) = app.send(Method::GET, "/api/dashboard", &headers, None).await;
    assert_eq!(status, StatusCode::OK);

    let id = member_id_for_subject("user_2abcDEF123").unwrap();
    assert_eq!(second["data"]["member"]["id"], json!(id));
    assert_eq!(first["data"]["last_active_at"], second["data"]["member"]["last_active_at"]);
}

#[tokio::test]
async fn test_heartbeat_stores_last_active() {
    let app = TestApp::at(utc(7, 0));
    let me = app.seed_member("Elif");

    let (status, body) = app
        .request(Method::POST, "/api/presence/heartbeat", Some(me.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["next_heartbeat_in_seconds"], 120);
    let stored = app.repo.find_by_id(me.id).await.unwrap().unwrap();
    assert_eq!(stored.last_active_at, Some(app.now));
}

#[tokio::test]
async fn test_first_heartbeat_registers_member() {
    let app = TestApp::at(utc(7, 0));
    let id = Uuid::new_v4();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/presence/heartbeat",
            &[
                ("x-user-id", id.to_string()),
                ("x-user-name", "Deniz Aksoy".to_string()),
                ("x-user-email", "deniz@cultura.test".to_string()),
            ],
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["last_active_at"], json!(app.now));

    let stored = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Deniz Aksoy"));
    assert_eq!(stored.email.as_deref(), Some("deniz@cultura.test"));
    assert_eq!(stored.last_active_at, Some(app.now));
}

#[tokio::test]
async fn test_set_prayer_status_uses_preset() {
    // 10:00 UTC == 13:00 Istanbul
    let app = TestApp::at(utc(10, 0));
    let me = app.seed_member("Mehmet");

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/presence/status",
            Some(me.id),
            Some(json!({ "kind": "prayer" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["custom_status"]["kind"], "PRAYER");
    assert_eq!(data["presence"]["label"]["key"], "PRAYER");
    assert_eq!(data["presence"]["color_tag"], "purple");
    assert_eq!(data["presence"]["sub_label"]["key"], "BACK_AT");
    assert_eq!(data["presence"]["sub_label"]["time"], "13:15");

    let stored = app.repo.find_by_id(me.id).await.unwrap().unwrap();
    assert_eq!(stored.status_expires, Some(app.now + Duration::minutes(15)));
}

#[tokio::test]
async fn test_invalid_status_input_is_bad_request() {
    let app = TestApp::at(utc(10, 0));
    let me = app.seed_member("Can");

    let cases = [
        json!({ "kind": "CUSTOM" }),
        json!({ "kind": "CUSTOM", "message": "   " }),
        json!({ "kind": "VACATION" }),
        json!({ "kind": "LUNCH", "duration_minutes": 0 }),
        json!({ "kind": "LUNCH", "duration_minutes": 481 }),
        json!({ "kind": "CUSTOM", "message": "x".repeat(141) }),
    ];

    for case in cases {
        let (status, body) = app
            .request(Method::PUT, "/api/presence/status", Some(me.id), Some(case.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {case}");
        assert_eq!(body["error"], "VALIDATION_ERROR", "body: {case}");
    }

    let stored = app.repo.find_by_id(me.id).await.unwrap().unwrap();
    assert_eq!(stored.custom_status, None);
}

#[tokio::test]
async fn test_malformed_status_body_is_bad_request() {
    let app = TestApp::at(utc(10, 0));
    let me = app.seed_member("Can");
    let headers = [("x-user-id", me.id.to_string())];

    let bodies = [
        r#"{"kind":"LUNCH","duration_minutes":"abc"}"#,
        r#"{"kind":"LUNCH""#,
        r#"{"message":"no kind"}"#,
    ];

    for raw in bodies {
        let (status, body) = app
            .send(Method::PUT, "/api/presence/status", &headers, Some(raw.to_string()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
        assert_eq!(body["error"], "VALIDATION_ERROR", "body: {raw}");
        assert!(body["message"].is_string(), "body: {raw}");
    }
}

#[tokio::test]
async fn test_padded_custom_message_is_trimmed_before_length_check() {
    let app = TestApp::at(utc(10, 0));
    let me = app.seed_member("Zeynep");
    let message = "x".repeat(140);

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/presence/status",
            Some(me.id),
            Some(json!({ "kind": "CUSTOM", "message": format!("   {message}   ") })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["custom_status"]["message"], json!(message));
    assert_eq!(body["data"]["presence"]["label"]["text"], json!(message));
}

#[tokio::test]
async fn test_clear_status_round_trip() {
    let app = TestApp::at(utc(10, 0));
    let me = app.seed_member("Zeynep");

    let (status, _) = app
        .request(
            Method::PUT,
            "/api/presence/status",
            Some(me.id),
            Some(json!({ "kind": "CUSTOM", "message": "Dentist", "duration_minutes": 120 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(Method::DELETE, "/api/presence/status", Some(me.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["custom_status"]["kind"].is_null());
    assert!(body["data"]["custom_status"]["expires_at"].is_null());
    // No heartbeat and mid-afternoon: the default rule.
    assert_eq!(body["data"]["presence"]["label"]["key"], "WORKING");

    let stored = app.repo.find_by_id(me.id).await.unwrap().unwrap();
    assert_eq!(stored.custom_status, None);
    assert_eq!(stored.status_message, None);
    assert_eq!(stored.status_expires, None);
}
