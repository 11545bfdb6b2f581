/**
 * Registration Policies
 *
 * Field validation for registration is pluggable so it can be tightened
 * without touching the registration flow. The default policy accepts every
 * input; `StrictPolicy` applies format checks to email, password and handle.
 */

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::shared::{PolicyKind, SharedError};

/// Decides whether a registration request is acceptable
pub trait RegistrationPolicy: Send + Sync {
    /// Reject the request with a field-level validation error, or accept it
    fn check(&self, request: &RegisterRequest) -> Result<(), SharedError>;
}

/// Accepts any field contents
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissivePolicy;

impl RegistrationPolicy for PermissivePolicy {
    fn check(&self, _request: &RegisterRequest) -> Result<(), SharedError> {
        Ok(())
    }
}

/// Minimum password length under `StrictPolicy`
pub const MIN_PASSWORD_LEN: usize = 8;

/// Basic format checks on email, password and handle
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictPolicy;

impl RegistrationPolicy for StrictPolicy {
    fn check(&self, request: &RegisterRequest) -> Result<(), SharedError> {
        if !is_plausible_email(&request.email) {
            return Err(SharedError::validation("email", "Invalid email format"));
        }
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        if let Some(handle) = &request.user_name {
            if !is_valid_username(handle) {
                return Err(SharedError::validation(
                    "userName",
                    "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
                ));
            }
        }
        Ok(())
    }
}

/// Build the policy selected by configuration
pub fn policy_for(kind: PolicyKind) -> Box<dyn RegistrationPolicy> {
    match kind {
        PolicyKind::Permissive => Box::new(PermissivePolicy),
        PolicyKind::Strict => Box::new(StrictPolicy),
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Usernames must be 3-30 characters, start with a letter, and contain only
/// ASCII letters, digits and underscores
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
