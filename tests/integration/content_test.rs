//! Integration tests for FAQ and update content flows.

use chrono::{Duration, Utc};
use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_faq_create_then_public_list_and_view_count() {
    let app = TestApp::new().await;
    let admin = app.register_admin("a@x.com", "admin_a", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "sampling",
                "question": "Q1",
                "answer": "A1",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let faq_id = created.data()["id"].as_str().unwrap().to_string();
    // Defaults applied on create.
    assert_eq!(created.data()["priority"], "medium");
    assert_eq!(created.data()["status"], "active");
    assert_eq!(created.data()["tags"], serde_json::json!([]));

    // Public list includes the entry with view_count 0; list reads do
    // not count as views.
    let list = app.request("GET", "/api/user/faqs", None, None).await;
    assert_eq!(list.status, StatusCode::OK);
    let entry = list
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["question"] == "Q1")
        .expect("created FAQ missing from public list");
    assert_eq!(entry["view_count"], 0);
    assert_eq!(entry["is_new"], true);

    // One detail view bumps the counter to 1.
    let detail = app
        .request("GET", &format!("/api/user/faqs/{faq_id}"), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.data()["view_count"], 1);

    // Admin reads do not count as views.
    let admin_get = app
        .request("GET", &format!("/api/admin/faqs/{faq_id}"), None, Some(&admin))
        .await;
    assert_eq!(admin_get.data()["view_count"], 1);
}

#[tokio::test]
async fn test_faq_create_requires_question_and_answer() {
    let app = TestApp::new().await;
    let admin = app.register_admin("v@x.com", "admin_v", "pw123456").await;

    let response = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "sampling",
                "question": "   ",
                "answer": "A1",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_faq_partial_update_merges() {
    let app = TestApp::new().await;
    let admin = app.register_admin("m@x.com", "admin_m", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "equipment",
                "question": "Original question?",
                "answer": "Original answer.",
            })),
            Some(&admin),
        )
        .await;
    let faq_id = created.data()["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/faqs/{faq_id}"),
            Some(serde_json::json!({ "answer": "Corrected answer." })),
            Some(&admin),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    // Untouched fields survive a partial update.
    assert_eq!(updated.data()["question"], "Original question?");
    assert_eq!(updated.data()["answer"], "Corrected answer.");
}

#[tokio::test]
async fn test_faq_stale_conditional_update_conflicts() {
    let app = TestApp::new().await;
    let admin = app.register_admin("c@x.com", "admin_c", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "sampling",
                "question": "Versioned?",
                "answer": "Yes.",
            })),
            Some(&admin),
        )
        .await;
    let faq_id = created.data()["id"].as_str().unwrap().to_string();

    let stale = (Utc::now() - Duration::days(1)).to_rfc3339();
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/faqs/{faq_id}"),
            Some(serde_json::json!({
                "answer": "Lost update.",
                "expected_updated_at": stale,
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_faq_delete_is_idempotent_safe() {
    let app = TestApp::new().await;
    let admin = app.register_admin("d@x.com", "admin_d", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "sampling",
                "question": "Deletable?",
                "answer": "Soon gone.",
            })),
            Some(&admin),
        )
        .await;
    let faq_id = created.data()["id"].as_str().unwrap().to_string();

    let first = app
        .request("DELETE", &format!("/api/admin/faqs/{faq_id}"), None, Some(&admin))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Second delete reports NotFound rather than crashing.
    let second = app
        .request("DELETE", &format!("/api/admin/faqs/{faq_id}"), None, Some(&admin))
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_update_hidden_from_users_but_visible_to_admin() {
    let app = TestApp::new().await;
    let admin = app.register_admin("e@x.com", "admin_e", "pw123456").await;

    let yesterday = (Utc::now() - Duration::days(1)).to_rfc3339();
    let created = app
        .request(
            "POST",
            "/api/admin/updates",
            Some(serde_json::json!({
                "title": "Stale alert",
                "content": "This alert has lapsed.",
                "kind": "alert",
                "auto_expire": true,
                "expiration_date": yesterday,
                "status": "published",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["status"], "published");

    let public = app.request("GET", "/api/user/updates", None, None).await;
    assert!(
        !public
            .data()
            .as_array()
            .unwrap()
            .iter()
            .any(|u| u["title"] == "Stale alert"),
        "auto-expired update leaked into the public list"
    );

    let admin_list = app
        .request("GET", "/api/admin/updates", None, Some(&admin))
        .await;
    assert!(
        admin_list
            .data()
            .as_array()
            .unwrap()
            .iter()
            .any(|u| u["title"] == "Stale alert"),
        "expired update missing from the admin list"
    );
}

#[tokio::test]
async fn test_draft_update_hidden_from_users() {
    let app = TestApp::new().await;
    let admin = app.register_admin("f@x.com", "admin_f", "pw123456").await;

    app.request(
        "POST",
        "/api/admin/updates",
        Some(serde_json::json!({
            "title": "Unfinished draft",
            "content": "Not ready yet.",
            "status": "draft",
        })),
        Some(&admin),
    )
    .await;

    let public = app.request("GET", "/api/user/updates", None, None).await;
    assert!(
        !public
            .data()
            .as_array()
            .unwrap()
            .iter()
            .any(|u| u["title"] == "Unfinished draft")
    );
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = TestApp::new().await;
    let admin = app.register_admin("r@x.com", "admin_r", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/updates",
            Some(serde_json::json!({
                "title": "Round trip",
                "content": "Same coming back.",
                "kind": "news",
                "tags": ["tides", "safety"],
            })),
            Some(&admin),
        )
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/admin/updates/{id}"), None, Some(&admin))
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "Round trip");
    assert_eq!(fetched.data()["kind"], "news");
    assert_eq!(fetched.data()["tags"], serde_json::json!(["tides", "safety"]));
    assert!(fetched.data()["created_at"].as_str().is_some());
}
