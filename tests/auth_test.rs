//! Integration tests for the login flow and the admin route guard.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use common::{TEST_JWT_SECRET, TestApp};
use portfolio_auth::jwt::Claims;

/// Signs a token with the test secret that expired an hour ago.
fn expired_token(user_id: Uuid, username: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

#[tokio::test]
async fn test_login_success() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    app.create_test_user("login_ok_user", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "login_ok_user",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());
    assert_eq!(response.body["username"], "login_ok_user");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    app.create_test_user("login_badpw_user", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "login_badpw_user",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_unknown_user_indistinguishable_from_wrong_password() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    app.create_test_user("login_enum_user", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "login_enum_user",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    let unknown_user = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "no_such_user_anywhere",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, wrong_password.status);
    assert_eq!(unknown_user.body, wrong_password.body);
}

#[tokio::test]
async fn test_login_empty_fields_rejected() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_route_without_header_rejected() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let response = app
        .request(
            "DELETE",
            &format!("/admin/projects/{}", Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Access token required");
}

#[tokio::test]
async fn test_admin_route_with_expired_token_rejected() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let user_id = app.create_test_user("login_expired_user", "password123").await;

    let token = expired_token(user_id, "login_expired_user");
    let response = app
        .request(
            "DELETE",
            &format!("/admin/projects/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_end_to_end_admin_flow() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    app.create_test_user("admin", "correct horse").await;

    let token = app.login("admin", "correct horse").await;

    // Create a project through the guarded route.
    let created = app
        .request(
            "POST",
            "/admin/projects",
            Some(serde_json::json!({
                "title": "E2E Flow Project",
                "description": "Created during the end-to-end test",
                "tech_stack": ["Rust"],
                "links": { "github": "https://github.com/mkmcgrath/e2e" },
                "tags": ["test"],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();

    // Delete it with the same token.
    let deleted = app
        .request("DELETE", &format!("/admin/projects/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Project deleted");

    // The same call without a header is rejected before the handler runs.
    let unauthorized = app
        .request("DELETE", &format!("/admin/projects/{id}"), None, None)
        .await;
    assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unauthorized.body["error"], "Access token required");
}
