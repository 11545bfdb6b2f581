//! Hoco Education - Server Library
//!
//! REST backend for an education-content platform: account registration and
//! login with bcrypt-hashed passwords and signed session tokens, plus CRUD
//! pass-through endpoints over the course, instructor, book and review
//! collections.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and error types usable without the server
//! - **`backend`** - Axum HTTP server, authentication, catalog and storage
//!   (only compiled with the `ssr` feature, enabled by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use hoco_education::backend::server::init::create_app;
//! use hoco_education::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
