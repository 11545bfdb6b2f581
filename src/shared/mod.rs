//! Shared Module
//!
//! Types that do not depend on the HTTP server: configuration and the
//! error types raised while loading or validating it. Everything here is
//! compiled regardless of the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, PolicyKind};
pub use error::SharedError;
