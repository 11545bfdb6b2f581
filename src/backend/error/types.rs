/**
 * Backend Error Types
 *
 * Every handler returns `Result<_, BackendError>`. The enum wraps the errors
 * of the layers below it and decides which HTTP status and which client
 * message each one maps to.
 *
 * # Status Code Mapping
 *
 * - `DuplicateAccount` - 400 Bad Request
 * - `InvalidCredentials` - 401 Unauthorized
 * - Validation failures - 400 Bad Request
 * - Unreadable request bodies - the extractor's status (400, 415 or 422)
 * - Store, hashing and signing failures - 500, with a generic message so
 *   internal details never reach the client
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::AuthError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message sent to clients for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. not found, bad id)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage failure outside the authentication flow
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// The request body was missing, malformed or not JSON
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 404 for a missing resource
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => match err {
                AuthError::DuplicateAccount => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::StoreUnavailable(_)
                | AuthError::Hashing(_)
                | AuthError::Token(_)
                | AuthError::ExpiryOverflow => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::JsonRejection(rejection) => rejection.status(),
        }
    }

    /// Get the message shown to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { status, message } if !status.is_server_error() => message.clone(),
            Self::Auth(err @ (AuthError::DuplicateAccount | AuthError::InvalidCredentials)) => {
                err.to_string()
            }
            Self::Auth(AuthError::Validation(err)) | Self::SharedError(err) => {
                err.message().to_string()
            }
            Self::JsonRejection(rejection) => rejection.body_text(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
