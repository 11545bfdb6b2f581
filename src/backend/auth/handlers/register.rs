/**
 * Register Handler
 *
 * POST /api/v1/register
 *
 * # Registration Process
 *
 * 1. Apply the configured registration policy
 * 2. Hash the password with bcrypt (cost 10 by default)
 * 3. Insert a student record; the store rejects a duplicate email
 *
 * Nothing about the new account is echoed back.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - email already registered, or a policy violation
/// * `500 Internal Server Error` - the user store failed or hashing failed
///
/// # Example Request
///
/// ```http
/// POST /api/v1/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "image": "https://img.example.com/ada.png",
///   "userName": "ada",
///   "email": "ada@example.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "success": true, "message": "User registered successfully!" }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    tracing::info!(email = %request.email, "register request");

    auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("User registered successfully!")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::LoginRequest;
    use crate::backend::store::MemoryStore;
    use crate::shared::AppConfig;
    use std::sync::Arc;

    fn service() -> AuthService {
        let config = AppConfig::builder()
            .jwt_secret("test-secret")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        AuthService::from_config(Arc::new(MemoryStore::new()), &config)
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: None,
            image: None,
            user_name: None,
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let auth = service();
        let (status, Json(body)) = register(State(auth.clone()), ApiJson(request("new@example.com")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(body.success);

        let login = LoginRequest {
            email: "new@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(auth.login(login).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let auth = service();
        register(State(auth.clone()), ApiJson(request("dup@example.com")))
            .await
            .unwrap();

        let err = register(State(auth), ApiJson(request("dup@example.com")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
