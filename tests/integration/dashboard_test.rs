//! Dashboard assembly over HTTP.

mod helpers;

use chrono::Duration;
use cultura_entity::{Message, Task};
use http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use cultura_database::MemberRepository;
use cultura_status::{CustomStatus, StatusKind};
use helpers::{TestApp, utc};

#[tokio::test]
async fn test_dashboard_requires_identity() {
    let app = TestApp::at(utc(7, 0));
    let (status, body) = app.get("/api/dashboard", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_dashboard_on_empty_store_registers_caller() {
    let app = TestApp::at(utc(7, 0));
    let id = Uuid::new_v4();

    let (status, body) = app
        .send(
            Method::GET,
            "/api/dashboard",
            &[
                ("x-user-id", id.to_string()),
                ("x-user-name", "Selin Arslan".to_string()),
            ],
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["member"]["id"], json!(id));
    assert_eq!(data["member"]["name"], "Selin Arslan");
    assert_eq!(data["member"]["language"], "tr");
    assert_eq!(data["colleagues"], json!([]));
    assert_eq!(data["my_presence"]["label"]["key"], "WORKING");
}

#[tokio::test]
async fn test_profile_headers_refresh_without_touching_status() {
    let app = TestApp::at(utc(7, 0));
    let me = app.seed_member("Elif");
    let lunch = CustomStatus::declare(StatusKind::Lunch, None, None, app.now).unwrap();
    app.repo.save_custom_status(me.id, &lunch, app.now).await.unwrap();

    let (status, body) = app
        .send(
            Method::GET,
            "/api/dashboard",
            &[
                ("x-user-id", me.id.to_string()),
                ("x-user-name", "Elif Kaya".to_string()),
            ],
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member"]["name"], "Elif Kaya");
    assert_eq!(body["data"]["member"]["email"], "elif@cultura.test");
    assert_eq!(body["data"]["my_presence"]["label"]["key"], "LUNCH");
}

#[tokio::test]
async fn test_dashboard_resolves_colleagues_by_recency() {
    // 07:00 UTC == 10:00 Istanbul, mid-morning
    let app = TestApp::at(utc(7, 0));
    let now = app.now;

    let me = app.seed_member("Elif");
    let stale = app.seed_member("Can");
    let online = app.seed_member("Zeynep");
    let lunching = app.seed_member("Mehmet");
    let never = app.seed_member("Ayse");

    app.repo.touch_last_active(stale.id, now - Duration::minutes(10)).await.unwrap();
    app.repo.touch_last_active(online.id, now - Duration::minutes(2)).await.unwrap();
    app.repo.touch_last_active(lunching.id, now - Duration::seconds(20)).await.unwrap();
    let lunch = CustomStatus::declare(StatusKind::Lunch, None, None, now).unwrap();
    app.repo.save_custom_status(lunching.id, &lunch, now).await.unwrap();

    app.repo.insert_message(Message::new(online.id, "günaydın"));
    app.repo.insert_message(Message::new(me.id, "selam"));
    app.repo.insert_task(Task::new(me.id, "quarterly review"));

    let (status, body) = app.get("/api/dashboard", Some(me.id)).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];

    assert_eq!(data["member"]["id"], json!(me.id));
    assert_eq!(data["company_status"]["state"], "MORNING");
    assert_eq!(data["company_status"]["next_boundary_time"], "12:00");
    assert_eq!(data["message_count"], 1);
    assert_eq!(data["pending_task_count"], 1);
    // The requester has no heartbeat yet.
    assert_eq!(data["my_presence"]["label"]["key"], "WORKING");

    let colleagues = data["colleagues"].as_array().unwrap();
    let names: Vec<&str> = colleagues
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mehmet", "Zeynep", "Can", "Ayse"]);
    assert!(colleagues.iter().all(|c| c["id"] != json!(me.id)));

    // Custom status wins over a fresh heartbeat.
    assert_eq!(colleagues[0]["presence"]["label"]["key"], "LUNCH");
    assert_eq!(colleagues[0]["presence"]["color_tag"], "purple");
    assert_eq!(colleagues[0]["presence"]["sub_label"]["time"], "11:00");

    assert_eq!(colleagues[1]["presence"]["label"]["key"], "ACTIVE_IN_APP");
    assert_eq!(colleagues[1]["presence"]["color_tag"], "green");
    assert_eq!(colleagues[1]["presence"]["sub_label"]["key"], "ONLINE");

    // Ten minutes stale during the morning block reads as working.
    assert_eq!(colleagues[2]["presence"]["label"]["key"], "WORKING");
    assert_eq!(colleagues[2]["presence"]["color_tag"], "blue");
    assert_eq!(colleagues[3]["id"], json!(never.id));
}

#[tokio::test]
async fn test_heartbeat_shows_up_on_dashboard() {
    let app = TestApp::at(utc(7, 0));
    let me = app.seed_member("Elif");

    let (status, _) = app
        .request(Method::POST, "/api/presence/heartbeat", Some(me.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/dashboard", Some(me.id)).await;
    assert_eq!(body["data"]["my_presence"]["label"]["key"], "ACTIVE_IN_APP");
    assert_eq!(body["data"]["my_presence"]["color_tag"], "green");
}

#[tokio::test]
async fn test_after_hours_colleagues_are_off_duty() {
    // 18:00 UTC == 21:00 Istanbul
    let app = TestApp::at(utc(18, 0));
    let me = app.seed_member("Elif");
    let late = app.seed_member("Can");
    app.repo
        .touch_last_active(late.id, app.now - Duration::hours(1))
        .await
        .unwrap();

    let (status, body) = app.get("/api/dashboard", Some(me.id)).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["company_status"]["state"], "AFTER_SHIFT");
    assert_eq!(data["company_status"]["color_tag"], "gray");
    assert_eq!(data["colleagues"][0]["presence"]["label"]["key"], "OFF_DUTY");
    assert_eq!(data["colleagues"][0]["presence"]["color_tag"], "slate");
    assert_eq!(data["colleagues"][0]["presence"]["sub_label"]["key"], "OFFLINE");
}

#[tokio::test]
async fn test_expired_status_no_longer_shown() {
    let app = TestApp::at(utc(7, 0));
    let me = app.seed_member("Elif");
    let other = app.seed_member("Mehmet");

    let earlier = app.now - Duration::minutes(20);
    let prayer = CustomStatus::declare(StatusKind::Prayer, None, None, earlier).unwrap();
    app.repo.save_custom_status(other.id, &prayer, earlier).await.unwrap();

    let (_, body) = app.get("/api/dashboard", Some(me.id)).await;
    assert_eq!(body["data"]["colleagues"][0]["presence"]["label"]["key"], "WORKING");
}
