/**
 * API Routes
 *
 * Authentication endpoints.
 *
 * # Routes
 *
 * - `POST /api/v1/register` - Account registration
 * - `POST /api/v1/login` - Login, returns a bearer token
 * - `GET /api/v1/me` - Claims of the presented token (requires authentication)
 */

use axum::{middleware::from_fn_with_state, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/api/v1/me` is wrapped in `auth_middleware`, which needs the state to
/// reach the token issuer. Register and login are public.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/v1/me", axum::routing::get(get_me))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        .route("/api/v1/register", axum::routing::post(register))
        .route("/api/v1/login", axum::routing::post(login))
        .merge(protected)
}
