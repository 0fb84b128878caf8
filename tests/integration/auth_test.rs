//! Integration tests for registration and login.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Mara Ellis",
                "email": "mara@example.com",
                "username": "mara_e",
                "password": "pw123456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.data();
    assert!(data["token"].as_str().is_some());
    assert_eq!(data["user"]["username"], "mara_e");
    assert_eq!(data["user"]["role"], "citizen");
    // The hash never leaves the server.
    assert!(data["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register("dup@example.com", "first_user", "pw123456").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Second",
                "email": "dup@example.com",
                "username": "second_user",
                "password": "pw123456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    app.register("one@example.com", "taken_name", "pw123456").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Two",
                "email": "two@example.com",
                "username": "taken_name",
                "password": "pw123456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Shorty",
                "email": "shorty@example.com",
                "username": "shorty",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_identical() {
    let app = TestApp::new().await;
    app.register("known@example.com", "known_user", "pw123456")
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "known@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "pw123456",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    // Same status AND same body, so accounts cannot be enumerated.
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let app = TestApp::new().await;
    app.register("login@example.com", "login_user", "pw123456")
        .await;

    let token = app.login("login@example.com", "pw123456").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/profile", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_returns_current_user() {
    let app = TestApp::new().await;
    let token = app
        .register("me@example.com", "me_user", "pw123456")
        .await;

    let response = app
        .request("GET", "/api/auth/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"], "me@example.com");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/profile", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
