//! Common test utilities and helpers
//!
//! - Test server construction over an in-memory store
//! - Authentication helpers (register, login, token forging)

#![allow(dead_code)]

pub mod auth_helpers;

pub use auth_helpers::*;

use std::time::Duration;

use axum_test::TestServer;
use hoco_education::backend::server::{create_app_with, Stores};
use hoco_education::shared::{AppConfig, PolicyKind};

/// Secret used by every test server
pub const TEST_SECRET: &str = "test-secret-do-not-use";

/// Configuration tuned for tests: cheap bcrypt, one hour tokens
pub fn test_config() -> AppConfig {
    test_config_with_policy(PolicyKind::Permissive)
}

/// Test configuration with a chosen registration policy
pub fn test_config_with_policy(policy: PolicyKind) -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .token_ttl(Duration::from_secs(3600))
        .bcrypt_cost(4)
        .registration_policy(policy)
        .build()
        .expect("valid test configuration")
}

/// A server over a fresh in-memory store
pub fn test_server() -> TestServer {
    test_server_with(test_config())
}

/// A server over a fresh in-memory store with `config`
pub fn test_server_with(config: AppConfig) -> TestServer {
    let app = create_app_with(config, Stores::memory());
    TestServer::new(app).expect("Failed to create test server")
}
