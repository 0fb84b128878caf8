//! Integration tests for the admin surface and the authorization matrix.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_routes_authorization_matrix() {
    let app = TestApp::new().await;
    let citizen = app.register("cit@x.com", "plain_citizen", "pw123456").await;
    let admin = app.register_admin("boss@x.com", "boss_admin", "pw123456").await;

    // No token → 401.
    let response = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Valid citizen token → 403.
    let response = app
        .request("GET", "/api/admin/users", None, Some(&citizen))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Admin token → 200 with the expected payload.
    let response = app
        .request("GET", "/api/admin/users", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_creates_user_with_role() {
    let app = TestApp::new().await;
    let admin = app.register_admin("own@x.com", "owner_admin", "pw123456").await;

    let created = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({
                "name": "Mod Person",
                "email": "mod@x.com",
                "username": "mod_person",
                "password": "pw123456",
                "role": "moderator",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["role"], "moderator");

    // The new account can log in straight away.
    app.login("mod@x.com", "pw123456").await;
}

#[tokio::test]
async fn test_admin_updates_role_and_status() {
    let app = TestApp::new().await;
    let admin = app.register_admin("rr@x.com", "role_admin", "pw123456").await;
    app.register("subj@x.com", "subject_user", "pw123456").await;

    let listed = app
        .request("GET", "/api/admin/users", None, Some(&admin))
        .await;
    let subject_id = listed.data()["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "subject_user")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/users/{subject_id}"),
            Some(serde_json::json!({ "role": "moderator", "status": "suspended" })),
            Some(&admin),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["role"], "moderator");
    assert_eq!(updated.data()["status"], "suspended");

    // Suspended accounts cannot log in, and the error shape matches a
    // bad password.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "subj@x.com", "password": "pw123456" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_delete_user_and_missing_id() {
    let app = TestApp::new().await;
    let admin = app.register_admin("dd@x.com", "del_admin", "pw123456").await;
    app.register("gone@x.com", "goner", "pw123456").await;

    let listed = app
        .request("GET", "/api/admin/users", None, Some(&admin))
        .await;
    let target_id = listed.data()["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "goner")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{target_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    // Unknown id → 404, not a crash.
    let missing = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new().await;
    let admin = app.register_admin("self@x.com", "self_admin", "pw123456").await;

    let profile = app
        .request("GET", "/api/auth/profile", None, Some(&admin))
        .await;
    let own_id = profile.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{own_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_system_stats_counts_collections() {
    let app = TestApp::new().await;
    let admin = app.register_admin("st@x.com", "stats_admin", "pw123456").await;

    app.request(
        "POST",
        "/api/admin/faqs",
        Some(serde_json::json!({
            "category": "sampling",
            "question": "Counted?",
            "answer": "Yes.",
        })),
        Some(&admin),
    )
    .await;

    let stats = app
        .request("GET", "/api/admin/stats", None, Some(&admin))
        .await;

    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(stats.data()["total_users"], 1);
    assert_eq!(stats.data()["active_users"], 1);
    assert_eq!(stats.data()["total_faqs"], 1);
}

#[tokio::test]
async fn test_health_reports_database_and_uptime() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "connected");
    assert!(response.data()["uptime_seconds"].as_u64().is_some());
    assert!(response.data()["version"].as_str().is_some());

    // Same probe under /api.
    let api_health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(api_health.status, StatusCode::OK);
}
