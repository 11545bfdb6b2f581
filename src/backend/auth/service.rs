/**
 * Account Authentication Service
 *
 * Registration turns a raw password into a bcrypt hash and inserts a
 * student record; login checks a password against the stored hash and
 * issues a session token.
 *
 * # Uniqueness
 *
 * Registration does not look the email up before inserting. The store
 * enforces uniqueness atomically and a duplicate insert comes back as
 * `StoreError::Duplicate`, which maps to `AuthError::DuplicateAccount`. This
 * closes the window where two concurrent registrations could both pass a
 * lookup and both insert.
 *
 * # Enumeration
 *
 * Login answers `InvalidCredentials` for an unknown email and for a wrong
 * password alike. An unknown email still runs one bcrypt verification,
 * against a placeholder hash made at the configured cost, so both failures
 * take about the same time.
 */

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::policy::{policy_for, RegistrationPolicy};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::User;
use crate::backend::store::UserStore;
use crate::shared::AppConfig;

/// Registration and login over a `UserStore`
#[derive(Clone)]
pub struct AuthService {
    inner: Arc<Inner>,
}

struct Inner {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
    policy: Box<dyn RegistrationPolicy>,
    bcrypt_cost: u32,
    placeholder_hash: OnceCell<String>,
}

/// Password hashed once to give unknown-email logins a hash to verify against
const PLACEHOLDER_PASSWORD: &str = "placeholder-password-for-unknown-accounts";

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: TokenIssuer,
        policy: Box<dyn RegistrationPolicy>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                users,
                tokens,
                policy,
                bcrypt_cost,
                placeholder_hash: OnceCell::new(),
            }),
        }
    }

    /// Build the service from startup configuration
    pub fn from_config(users: Arc<dyn UserStore>, config: &AppConfig) -> Self {
        Self::new(
            users,
            TokenIssuer::new(&config.jwt_secret, config.token_ttl),
            policy_for(config.registration_policy),
            config.bcrypt_cost,
        )
    }

    /// The issuer used for login tokens
    pub fn tokens(&self) -> &TokenIssuer {
        &self.inner.tokens
    }

    /// Create a student account.
    ///
    /// # Errors
    ///
    /// * `Validation` - the registration policy rejected a field
    /// * `DuplicateAccount` - the email already has an account; nothing is written
    /// * `StoreUnavailable` - the user store failed or timed out
    /// * `Hashing` - bcrypt failed
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        self.inner.policy.check(&request)?;

        let RegisterRequest {
            name,
            image,
            user_name,
            email,
            password,
        } = request;

        let password_hash = hash_password(password, self.inner.bcrypt_cost).await?;
        let user = User::new_student(name, image, user_name, email, password_hash);

        match self.inner.users.insert_user(&user).await {
            Ok(()) => {
                tracing::info!(email = %user.email, "user registered");
                Ok(())
            }
            Err(err) => {
                let err = AuthError::from(err);
                match &err {
                    AuthError::DuplicateAccount => {
                        tracing::warn!(email = %user.email, "registration for existing email")
                    }
                    other => tracing::error!(error = %other, "failed to insert user"),
                }
                Err(err)
            }
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - no account for the email, or the password does not match
    /// * `StoreUnavailable` - the user store failed or timed out
    /// * `Hashing` / `Token` - bcrypt or token signing failed
    pub async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        let LoginRequest { email, password } = request;

        let user = self.inner.users.find_user_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "failed to look up user");
            AuthError::from(e)
        })?;

        let Some(user) = user else {
            let placeholder = self.placeholder_hash().await?;
            verify_password(password, placeholder).await?;
            tracing::warn!(%email, "login for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            tracing::warn!(%email, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.inner.tokens.issue(&user)?;
        tracing::info!(%email, role = %user.role, "user logged in");
        Ok(token)
    }

    async fn placeholder_hash(&self) -> Result<String, AuthError> {
        self.inner
            .placeholder_hash
            .get_or_try_init(|| hash_password(PLACEHOLDER_PASSWORD.to_string(), self.inner.bcrypt_cost))
            .await
            .cloned()
    }
}
