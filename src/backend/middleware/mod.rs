//! Middleware Module
//!
//! HTTP middleware applied before requests reach handlers.
//!
//! - **`auth`** - Bearer token verification for protected routes
//! - **`json`** - `ApiJson`, a JSON body extractor with API-shaped rejections
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use hoco_education::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/me", get(get_me))
//!     .layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub mod json;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
