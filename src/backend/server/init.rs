/**
 * Server Initialization
 *
 * Builds the Axum application from a validated `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the stores (PostgreSQL, or memory when no database is configured)
 * 2. Build the authentication service from the configuration
 * 3. Assemble `AppState`
 * 4. Create the router
 */

use axum::Router;

use crate::backend::auth::AuthService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, Stores};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StoreError` if a configured database cannot be reached or
/// migrated.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing education backend server");

    let stores = load_store(&config).await?;
    let app = create_app_with(config, stores);

    tracing::info!("Router configured");
    Ok(app)
}

/// Create the application over already opened stores
pub fn create_app_with(config: AppConfig, stores: Stores) -> Router<()> {
    create_router(build_state(&config, stores))
}

/// Assemble the state handed to every handler
pub fn build_state(config: &AppConfig, stores: Stores) -> AppState {
    let auth = AuthService::from_config(stores.users, config);
    tracing::info!(
        policy = ?config.registration_policy,
        token_ttl = %humantime::format_duration(config.token_ttl),
        "Authentication service initialized"
    );

    AppState {
        auth,
        documents: stores.documents,
    }
}
