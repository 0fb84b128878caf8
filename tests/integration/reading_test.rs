//! Integration tests for reading submission, streak tracking, and
//! stats behavior.

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

fn reading_payload(timestamp: chrono::DateTime<Utc>, accuracy: i32) -> Value {
    serde_json::json!({
        "parameter": "salinity",
        "value": 34.2,
        "location": { "latitude": -8.65, "longitude": 115.21, "village": "Sanur" },
        "timestamp": timestamp.to_rfc3339(),
        "accuracy": accuracy,
    })
}

async fn stats_for(app: &TestApp, token: &str) -> Value {
    let profile = app
        .request("GET", "/api/auth/profile", None, Some(token))
        .await;
    profile.data()["stats"].clone()
}

#[tokio::test]
async fn test_submit_reading_applies_defaults() {
    let app = TestApp::new().await;
    let token = app.register("s@x.com", "sampler_s", "pw123456").await;

    let response = app
        .request(
            "POST",
            "/api/readings",
            Some(serde_json::json!({
                "parameter": "dissolved_oxygen",
                "value": 6.8,
                "location": { "latitude": -8.7, "longitude": 115.2 },
                "accuracy": 85,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    // Unit defaults to the parameter's conventional unit.
    assert_eq!(response.data()["unit"], "mg/L");
    assert!(response.data()["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_invalid_accuracy_rejected() {
    let app = TestApp::new().await;
    let token = app.register("bad@x.com", "sampler_bad", "pw123456").await;

    let response = app
        .request(
            "POST",
            "/api/readings",
            Some(reading_payload(Utc::now(), 150)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_streak_increments_on_consecutive_days() {
    let app = TestApp::new().await;
    let token = app.register("st@x.com", "streaker", "pw123456").await;

    let day0 = Utc::now() - Duration::days(10);
    let day1 = day0 + Duration::days(1);

    app.request("POST", "/api/readings", Some(reading_payload(day0, 80)), Some(&token))
        .await;
    let stats = stats_for(&app, &token).await;
    assert_eq!(stats["streak"], 1);
    assert_eq!(stats["total_readings"], 1);

    app.request("POST", "/api/readings", Some(reading_payload(day1, 90)), Some(&token))
        .await;
    let stats = stats_for(&app, &token).await;
    assert_eq!(stats["streak"], 2);
    assert_eq!(stats["total_readings"], 2);
}

#[tokio::test]
async fn test_streak_resets_after_gap() {
    let app = TestApp::new().await;
    let token = app.register("gap@x.com", "gapper", "pw123456").await;

    let day0 = Utc::now() - Duration::days(10);
    let day1 = day0 + Duration::days(1);
    let day6 = day1 + Duration::days(5);

    for ts in [day0, day1, day6] {
        app.request("POST", "/api/readings", Some(reading_payload(ts, 80)), Some(&token))
            .await;
    }

    let stats = stats_for(&app, &token).await;
    assert_eq!(stats["streak"], 1, "gap over one day must reset the streak");
    assert_eq!(stats["total_readings"], 3);
}

#[tokio::test]
async fn test_delete_does_not_rewind_stats() {
    let app = TestApp::new().await;
    let token = app.register("del@x.com", "deleter", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/readings",
            Some(reading_payload(Utc::now(), 80)),
            Some(&token),
        )
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request("DELETE", &format!("/api/readings/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Submission history is an audit log: the counter stays at 1.
    let stats = stats_for(&app, &token).await;
    assert_eq!(stats["total_readings"], 1);
}

#[tokio::test]
async fn test_readings_are_private_to_their_owner() {
    let app = TestApp::new().await;
    let owner = app.register("own@x.com", "owner_u", "pw123456").await;
    let other = app.register("oth@x.com", "other_u", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/readings",
            Some(reading_payload(Utc::now(), 70)),
            Some(&owner),
        )
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request("GET", &format!("/api/readings/{id}"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The owner's own list contains it; the other user's list does not.
    let own_list = app.request("GET", "/api/readings", None, Some(&owner)).await;
    assert_eq!(own_list.data().as_array().unwrap().len(), 1);

    let other_list = app.request("GET", "/api/readings", None, Some(&other)).await;
    assert!(other_list.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_can_see_and_delete_any_reading() {
    let app = TestApp::new().await;
    let owner = app.register("c1@x.com", "citizen_one", "pw123456").await;
    let admin = app.register_admin("adm@x.com", "admin_adm", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/readings",
            Some(reading_payload(Utc::now(), 75)),
            Some(&owner),
        )
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let listed = app
        .request("GET", "/api/admin/readings", None, Some(&admin))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data()["items"].as_array().unwrap().len(), 1);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/readings/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}
