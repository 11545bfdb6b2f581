//! Authentication Module
//!
//! Account registration and login for the education platform.
//!
//! # Architecture
//!
//! - **`users`** - User record and role
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`policy`** - Pluggable registration field validation
//! - **`service`** - `AuthService`, the register/login flow over a `UserStore`
//! - **`error`** - `AuthError`
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: policy check → bcrypt hash → insert (store rejects duplicate email)
//! 2. **Login**: lookup by email → bcrypt verify → token with {name, image, email, role}
//! 3. **Me**: bearer token verified by middleware → claims returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never logged
//! - Tokens are stateless; there is no server-side session or revocation list
//! - Unknown email and wrong password both return 401 with the same body

/// User data model
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration policies
pub mod policy;

/// Authentication service
pub mod service;

/// Authentication errors
pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use error::AuthError;
pub use handlers::{get_me, login, register};
pub use handlers::{LoginRequest, LoginResponse, MeResponse, MessageResponse, RegisterRequest};
pub use service::AuthService;
pub use sessions::{Claims, TokenIssuer};
pub use users::{Role, User};
