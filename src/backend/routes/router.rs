/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health route (`GET /`)
 * 2. API routes (register, login, me)
 * 3. Catalog routes (courses, instructors, books, reviews)
 * 4. Fallback handler (404)
 *
 * # Layers
 *
 * - `TraceLayer` opens a span per request
 * - `CorsLayer::permissive()` allows any origin, method and header
 */

use axum::{http::StatusCode, response::Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::catalog_routes::configure_catalog_routes;
use crate::backend::server::state::AppState;

/// Message returned by the health route
pub const HEALTH_MESSAGE: &str = "Education server is running smoothly";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Authentication service, document store and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", axum::routing::get(health));

    let router = configure_api_routes(router, app_state.clone());
    let router = configure_catalog_routes(router);

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Liveness check
async fn health() -> Json<Value> {
    Json(json!({
        "message": HEALTH_MESSAGE,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::{build_state, Stores};
    use crate::shared::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    fn app() -> Router<()> {
        let config = AppConfig::builder()
            .jwt_secret("test-secret")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        create_router(build_state(&config, Stores::memory()))
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], HEALTH_MESSAGE);
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/v1/login")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_fallback_is_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
