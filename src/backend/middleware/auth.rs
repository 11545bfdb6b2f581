/**
 * Authentication Middleware
 *
 * Protects routes that need a logged-in user. The bearer token from the
 * `Authorization` header is verified against the configured secret and the
 * identity it carries is attached to the request extensions.
 *
 * Tokens are self-contained, so the user store is not consulted here.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{bearer_token, Claims};
use crate::backend::auth::users::Role;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub name: Option<String>,
    pub image: Option<String>,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            name: claims.name,
            image: claims.image,
            email: claims.email,
            role: claims.role,
        }
    }
}

fn unauthorized() -> BackendError {
    BackendError::handler(StatusCode::UNAUTHORIZED, "Unauthorized")
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches an `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if the token is missing, malformed or expired
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        unauthorized()
    })?;

    let claims = app_state.auth.tokens().verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid token");
        unauthorized()
    })?;

    request.extensions_mut().insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                unauthorized()
            })?;

        Ok(AuthUser(user))
    }
}
