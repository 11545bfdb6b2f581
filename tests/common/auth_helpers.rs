//! Authentication test helpers
//!
//! Register and log in through the HTTP API, and forge tokens with the test
//! secret for expiry and tampering cases.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum_test::TestServer;
use hoco_education::backend::auth::{TokenIssuer, User};
use serde_json::{json, Value};

use super::TEST_SECRET;

/// Test user credentials
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Registration body with every field filled in
pub fn registration_body(email: &str, password: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "image": "https://img.example.com/ada.png",
        "userName": "ada",
        "email": email,
        "password": password,
    })
}

/// Register a user and assert it succeeded
pub async fn register_user(server: &TestServer, email: &str, password: &str) {
    let response = server
        .post("/api/v1/register")
        .json(&registration_body(email, password))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log in and return the access token
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/v1/login")
        .json(&json!({"email": email, "password": password}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["accessToken"]
        .as_str()
        .expect("login response carries accessToken")
        .to_string()
}

/// Register and log in a user with a unique email
pub async fn create_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", uuid::Uuid::new_v4());
    let password = "test_password_123".to_string();
    register_user(server, &email, &password).await;
    let token = login_token(server, &email, &password).await;
    TestUser {
        email,
        password,
        token,
    }
}

/// A token signed with the test secret that expired a minute ago
pub fn expired_token(email: &str) -> String {
    let issuer = TokenIssuer::new(TEST_SECRET, Duration::from_secs(60));
    let user = User::new_student(None, None, None, email.to_string(), "$2b$04$hash".to_string());
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs();
    issuer
        .issue_at(&user, now - 120)
        .expect("Failed to create test token")
}

/// A fresh token signed with a secret the server does not know
pub fn foreign_token(email: &str) -> String {
    let issuer = TokenIssuer::new("some-other-secret", Duration::from_secs(3600));
    let user = User::new_student(None, None, None, email.to_string(), "$2b$04$hash".to_string());
    issuer.issue(&user).expect("Failed to create test token")
}
