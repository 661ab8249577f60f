//! Integration tests for authentication flow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TEST_EMAIL, TEST_PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], TEST_EMAIL);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let expires_at = response.body["expiresAt"]
        .as_str()
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .expect("expiresAt is RFC 3339");
    let minutes = (expires_at.with_timezone(&chrono::Utc) - chrono::Utc::now()).num_minutes();
    assert!((58..=60).contains(&minutes), "unexpected lifetime {minutes}m");
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!({ "email": TEST_EMAIL.to_uppercase(), "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!({ "email": TEST_EMAIL, "password": "wrong-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["title"], "Unauthorized");
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!({ "email": "nobody@example.com", "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!({ "email": "not-an-email", "password": "short" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["title"], "Validation failed");
    assert_eq!(response.body["errors"]["email"][0], "Invalid email format");
    assert!(response.body["errors"]["password"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/authentication/login",
            Some(json!(["not", "an", "object"])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"]["request"].is_array());
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/customers", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["type"], "https://httpstatuses.com/401");
    assert_eq!(
        response.body["message"],
        "Access denied. Valid authentication token required."
    );
}

#[tokio::test]
async fn test_garbage_and_tampered_tokens_rejected() {
    let app = TestApp::new();
    let token = app.login().await;

    let garbage = app
        .request("GET", "/api/customers", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let mut tampered = token.clone();
    tampered.push('x');
    let tampered = app
        .request("GET", "/api/customers", None, Some(&tampered))
        .await;
    assert_eq!(tampered.status, StatusCode::UNAUTHORIZED);

    let valid = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert_eq!(valid.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public_and_has_security_headers() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory: connected");
    assert_eq!(response.headers["x-frame-options"], "DENY");
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
}
