//! Integration tests for notification emission and read state.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_content_mutations_broadcast_notifications() {
    let app = TestApp::new().await;
    let citizen = app.register("cit@n.com", "notif_citizen", "pw123456").await;
    let admin = app.register_admin("adm@n.com", "notif_admin", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/faqs",
            Some(serde_json::json!({
                "category": "sampling",
                "question": "Announced?",
                "answer": "Broadly.",
            })),
            Some(&admin),
        )
        .await;
    let faq_id = created.data()["id"].as_str().unwrap().to_string();

    // The broadcast reaches a plain citizen.
    let list = app
        .request("GET", "/api/notifications", None, Some(&citizen))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let notifications = list.data().as_array().unwrap().clone();
    assert!(
        notifications
            .iter()
            .any(|n| n["kind"] == "content_created" && n["message"].as_str().unwrap().contains("Announced?"))
    );

    // Deletes emit too; every mutation kind uses the same policy.
    app.request("DELETE", &format!("/api/admin/faqs/{faq_id}"), None, Some(&admin))
        .await;
    let list = app
        .request("GET", "/api/notifications", None, Some(&citizen))
        .await;
    assert!(
        list.data()
            .as_array()
            .unwrap()
            .iter()
            .any(|n| n["kind"] == "content_deleted")
    );
}

#[tokio::test]
async fn test_unread_count_and_mark_read() {
    let app = TestApp::new().await;
    let citizen = app.register("rd@n.com", "reader_citizen", "pw123456").await;
    let admin = app.register_admin("ra@n.com", "reader_admin", "pw123456").await;

    app.request(
        "POST",
        "/api/admin/updates",
        Some(serde_json::json!({
            "title": "Please read",
            "content": "One unread notification.",
        })),
        Some(&admin),
    )
    .await;

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&citizen))
        .await;
    let unread_before = count.data()["count"].as_i64().unwrap();
    assert!(unread_before >= 1);

    let list = app
        .request("GET", "/api/notifications", None, Some(&citizen))
        .await;
    let first_id = list.data().as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let marked = app
        .request(
            "PUT",
            &format!("/api/notifications/{first_id}/read"),
            None,
            Some(&citizen),
        )
        .await;
    assert_eq!(marked.status, StatusCode::OK);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&citizen))
        .await;
    assert_eq!(count.data()["count"].as_i64().unwrap(), unread_before - 1);
}

#[tokio::test]
async fn test_mark_all_read() {
    let app = TestApp::new().await;
    let citizen = app.register("all@n.com", "all_citizen", "pw123456").await;
    let admin = app.register_admin("aa@n.com", "all_admin", "pw123456").await;

    for i in 0..3 {
        app.request(
            "POST",
            "/api/admin/updates",
            Some(serde_json::json!({
                "title": format!("Bulk {i}"),
                "content": "Bulk content.",
            })),
            Some(&admin),
        )
        .await;
    }

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(&citizen))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&citizen))
        .await;
    assert_eq!(count.data()["count"], 0);
}

#[tokio::test]
async fn test_mark_read_unknown_id_is_not_found() {
    let app = TestApp::new().await;
    let citizen = app.register("nf@n.com", "nf_citizen", "pw123456").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", uuid::Uuid::new_v4()),
            None,
            Some(&citizen),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notifications_require_authentication() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/notifications", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
