/**
 * Login Handler
 *
 * POST /api/v1/login
 *
 * Looks the user up by email, verifies the password with bcrypt and returns
 * a signed session token. Unknown email and wrong password produce the same
 * 401 response.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - the user store failed, or hashing / signing failed
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "message": "User successfully logged in!",
///   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let access_token = auth.login(request).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "User successfully logged in!".to_string(),
        access_token,
    }))
}
