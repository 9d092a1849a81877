//! Integration tests for the authentication gate and session endpoints.

use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use uuid::Uuid;

use orderhub_entity::user::UserRole;

use crate::helpers::{TEST_SECRET, TestApp};

#[tokio::test]
async fn test_no_cookie_is_unauthenticated() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/ordenes", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["error"], json!("UNAUTHENTICATED"));
}

#[tokio::test]
async fn test_garbage_cookie_is_unauthenticated() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/ordenes", Some("not-a-credential"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_credential_is_unauthenticated() {
    let app = TestApp::new();
    let token = app.issue_token("user@example.com", "User", UserRole::User);

    // Flip a character in the signature segment.
    let mut tampered = token.clone();
    let last = tampered.pop().map(|c| if c == 'A' { 'B' } else { 'A' });
    tampered.push(last.unwrap_or('A'));

    let response = app.request("GET", "/api/ordenes", Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_credential_is_unauthenticated() {
    let app = TestApp::new();

    // Hand-roll a credential whose expiry is well past the leeway window.
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": Uuid::new_v4(),
        "email": "user@example.com",
        "name": "User",
        "role": "user",
        "iat": now - 7200,
        "exp": now - 3600,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode expired credential");

    let response = app.request("GET", "/api/ordenes", Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_issued_claims() {
    let app = TestApp::new();
    let token = app.issue_token("user@example.com", "Some User", UserRole::User);

    let response = app.request("GET", "/api/auth/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["data"]["email"], json!("user@example.com"));
    assert_eq!(response.body["data"]["name"], json!("Some User"));
    assert_eq!(response.body["data"]["role"], json!("user"));
}

#[tokio::test]
async fn test_me_is_never_cached() {
    let app = TestApp::new();
    let token = app.issue_token("user@example.com", "Some User", UserRole::User);

    let response = app.request("GET", "/api/auth/me", Some(&token)).await;

    let cache_control = response
        .headers
        .get("cache-control")
        .and_then(|v| v.to_str().ok());
    assert_eq!(cache_control, Some("no-store"));
}

#[tokio::test]
async fn test_protected_me_alias_matches_me() {
    let app = TestApp::new();
    let token = app.issue_token("user@example.com", "Some User", UserRole::User);

    let response = app.request("GET", "/protected/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], json!("user@example.com"));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let token = app.issue_token("user@example.com", "Some User", UserRole::User);

    let response = app.request("POST", "/api/auth/logout", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));

    let set_cookie = response
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("Logout must send a removal cookie");
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_consent_url_carries_provider_parameters() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/google/url", None).await;

    assert_eq!(response.status, StatusCode::OK);
    // Bare `{url}` object, no envelope: the browser client reads the
    // property off the top level.
    assert!(response.body.get("success").is_none());
    let url = response.body["url"]
        .as_str()
        .expect("Consent URL must be a top-level string property");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth"));
    assert!(url.contains("client_id=test-client-id"));
    assert!(url.contains("access_type=offline"));
    assert!(url.contains("prompt=consent"));
}

#[tokio::test]
async fn test_callback_without_code_is_rejected() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/google/callback", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], json!(false));
}

#[tokio::test]
async fn test_callback_with_provider_denial_redirects_without_cookie() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/auth/google/callback?error=access_denied", None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(response.headers.get("set-cookie").is_none());
    assert_eq!(
        response.headers.get("location").and_then(|v| v.to_str().ok()),
        Some("http://localhost:5175")
    );
}
