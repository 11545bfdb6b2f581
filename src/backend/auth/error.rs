//! Authentication errors

use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Failures of the account authentication service
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already has an account
    #[error("User already exist!!!")]
    DuplicateAccount,

    /// Unknown email or wrong password; the two are deliberately identical
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user store failed or timed out
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The registration policy rejected a field
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// bcrypt failed to hash or verify
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// The configured token lifetime does not fit after the issue time
    #[error("token expiry overflows the timestamp range")]
    ExpiryOverflow,

    /// Token signing or verification failed
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::DuplicateAccount,
            StoreError::Unavailable(message) | StoreError::Corrupt(message) => {
                Self::StoreUnavailable(message)
            }
        }
    }
}
