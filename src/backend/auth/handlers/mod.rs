//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Current token identity handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/register
//! - **`login`** - POST /api/v1/login
//! - **`get_me`** - GET /api/v1/me (bearer token required)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current identity handler
pub mod me;

pub use types::{LoginRequest, LoginResponse, MeResponse, MessageResponse, RegisterRequest};

pub use login::login;
pub use me::get_me;
pub use register::register;
