//! Application configuration module
//!
//! Provides the process-wide configuration for the education server. Values
//! are fixed at startup: the signing secret and token lifetime in particular
//! are never mutated while the server runs.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bcrypt cost (10 rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default token lifetime (one day)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest accepted token lifetime (100 years)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Default bound on a single store interaction
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Which registration policy guards the register endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// Accept any field contents
    #[default]
    Permissive,
    /// Require a plausible email, a minimum password length and a well-formed handle
    Strict,
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::InvalidValue {
                key: "REGISTRATION_POLICY",
                message: format!("unknown policy '{}'", other),
            }),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Lifetime of an issued session token
    pub token_ttl: Duration,
    /// bcrypt cost factor used at registration
    pub bcrypt_cost: u32,
    /// Upper bound on any single store call
    pub store_timeout: Duration,
    /// Registration field policy
    pub registration_policy: PolicyKind,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "EXPIRES_IN",
                message: "token lifetime must be greater than zero".to_string(),
            });
        }
        if self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidValue {
                key: "EXPIRES_IN",
                message: format!(
                    "token lifetime must not exceed {}",
                    humantime::format_duration(MAX_TOKEN_TTL)
                ),
            });
        }
        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("cost {} is outside 4..=31", self.bcrypt_cost),
            });
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "STORE_TIMEOUT",
                message: "store timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    store_timeout: Option<Duration>,
    registration_policy: Option<PolicyKind>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the store timeout
    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    /// Set the registration policy
    pub fn registration_policy(mut self, policy: PolicyKind) -> Self {
        self.registration_policy = Some(policy);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            store_timeout: self.store_timeout.unwrap_or(DEFAULT_STORE_TIMEOUT),
            registration_policy: self.registration_policy.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a duration the way `EXPIRES_IN` is written.
///
/// A bare integer is a number of seconds; anything else goes through
/// `humantime` (`"1h"`, `"7d"`, `"30m 10s"`).
pub fn parse_duration(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(raw).map_err(|e| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        message: String,
    },
}
