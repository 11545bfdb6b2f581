/**
 * Authentication Handler Types
 *
 * Request and response bodies of the register, login and me endpoints.
 * Required fields are plain `String`s, optional ones `Option<String>`; a
 * body missing a required field is rejected by the `Json` extractor before
 * any handler runs.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::Role;

/// Register request
#[derive(Deserialize, Clone)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar reference
    #[serde(default)]
    pub image: Option<String>,
    /// Login handle
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
    /// Email address, unique across users
    pub email: String,
    /// Raw password (hashed before storage, never logged)
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("image", &self.image)
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login request
#[derive(Deserialize, Clone)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Raw password (verified against the stored hash)
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Confirmation with no data attached
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Signed session token
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Identity claims of the current bearer token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeResponse {
    pub name: Option<String>,
    pub image: Option<String>,
    pub email: String,
    pub role: Role,
}
