/**
 * Server Configuration
 *
 * Loads `AppConfig` from the process environment and opens the stores the
 * configuration points at.
 *
 * # Environment
 *
 * | Variable              | Default      | Notes                                 |
 * |-----------------------|--------------|---------------------------------------|
 * | `PORT`                | `5000`       |                                       |
 * | `DATABASE_URL`        | unset        | unset selects the in-memory store     |
 * | `JWT_SECRET`          | required     | token signing secret                  |
 * | `EXPIRES_IN`          | `1d`         | seconds, or a humantime duration      |
 * | `BCRYPT_COST`         | `10`         |                                       |
 * | `STORE_TIMEOUT`       | `30s`        | bound on each store call              |
 * | `REGISTRATION_POLICY` | `permissive` | `permissive` or `strict`              |
 *
 * A `.env` file is read by the binary before this module runs.
 */

use std::sync::Arc;

use crate::backend::store::{DocumentStore, MemoryStore, PgStore, StoreError, UserStore};
use crate::shared::config::parse_duration;
use crate::shared::{AppConfig, ConfigError, PolicyKind};

/// The two store handles the server runs on
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub documents: Arc<dyn DocumentStore>,
}

impl Stores {
    /// Both handles backed by one store
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: UserStore + DocumentStore + 'static,
    {
        Self {
            users: store.clone(),
            documents: store,
        }
    }

    /// A fresh in-memory store
    pub fn memory() -> Self {
        Self::shared(Arc::new(MemoryStore::new()))
    }
}

/// Load configuration from environment variables.
///
/// # Errors
///
/// Returns `ConfigError::MissingValue` when `JWT_SECRET` is unset and
/// `ConfigError::InvalidValue` when any variable fails to parse.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Empty values count as unset
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut builder = AppConfig::builder();

    if let Some(raw) = var("PORT") {
        let port = raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            key: "PORT",
            message: e.to_string(),
        })?;
        builder = builder.port(port);
    }
    if let Some(url) = var("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(secret) = var("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(raw) = var("EXPIRES_IN") {
        builder = builder.token_ttl(parse_duration("EXPIRES_IN", &raw)?);
    }
    if let Some(raw) = var("BCRYPT_COST") {
        let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
            key: "BCRYPT_COST",
            message: e.to_string(),
        })?;
        builder = builder.bcrypt_cost(cost);
    }
    if let Some(raw) = var("STORE_TIMEOUT") {
        builder = builder.store_timeout(parse_duration("STORE_TIMEOUT", &raw)?);
    }
    if let Some(raw) = var("REGISTRATION_POLICY") {
        builder = builder.registration_policy(raw.parse::<PolicyKind>()?);
    }

    builder.build()
}

/// Open the stores selected by `config`.
///
/// With a `DATABASE_URL` this connects to PostgreSQL and runs the
/// migrations; without one it falls back to an in-memory store, which loses
/// all data on restart.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` if the database cannot be reached or
/// migrated. A configured but unreachable database stops startup instead of
/// silently switching to memory.
pub async fn load_store(config: &AppConfig) -> Result<Stores, StoreError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return Ok(Stores::memory());
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url, config.store_timeout).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Stores::shared(Arc::new(store)))
}
