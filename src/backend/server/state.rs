/**
 * Application State Management
 *
 * `AppState` is the state container handed to the router. It holds the
 * authentication service and the document store behind the catalog routes.
 *
 * # Thread Safety
 *
 * Nothing in the state is mutated after startup. `AuthService` is
 * reference-counted, and the document store is shared
 * behind `Arc<dyn DocumentStore>`; all mutable data lives in the store.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they use:
 *
 * ```rust,ignore
 * async fn handler(State(auth): State<AuthService>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::AuthService;
use crate::backend::store::DocumentStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and token verification
    pub auth: AuthService,

    /// Storage for the catalog collections
    pub documents: Arc<dyn DocumentStore>,
}

/// Lets handlers extract `State<AuthService>` directly
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Lets handlers extract `State<Arc<dyn DocumentStore>>` directly
impl FromRef<AppState> for Arc<dyn DocumentStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.documents.clone()
    }
}
