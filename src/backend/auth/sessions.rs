/**
 * Session Tokens
 *
 * Login issues an HS256 JWT carrying the user's name, image, email and role
 * plus the standard `iat`/`exp` claims. Tokens are stateless: nothing is
 * recorded server-side, so there is no revocation and logout is a client
 * discarding its token.
 *
 * The secret and lifetime are fixed when the issuer is built at startup.
 */

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::users::{Role, User};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Display name, omitted from the payload when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar reference, omitted from the payload when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Email
    pub email: String,
    /// Role
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies session tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    inner: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer for `secret` whose tokens live for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                ttl,
            }),
        }
    }

    /// Issue a token for `user`, valid from now
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        self.issue_at(user, unix_now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: u64) -> Result<String, AuthError> {
        let exp = issued_at
            .checked_add(self.inner.ttl.as_secs())
            .ok_or(AuthError::ExpiryOverflow)?;
        let claims = Claims {
            name: user.name.clone(),
            image: user.image.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: issued_at,
            exp,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.inner.encoding)?)
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.inner.decoding, &validation)?;
        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
