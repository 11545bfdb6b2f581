/**
 * Current Identity Handler
 *
 * GET /api/v1/me
 *
 * Returns the identity claims of the bearer token presented with the
 * request. The route sits behind `auth_middleware`, which has already
 * verified the token; no store lookup happens here.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::AuthUser;

/// Get current identity handler
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        name: user.name,
        image: user.image,
        email: user.email,
        role: user.role,
    })
}
