//! Backend Module
//!
//! This module contains all server-side code for the education backend.
//! It is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, password hashing, session tokens
//! - **`catalog`** - Course / instructor / book / review collections
//! - **`store`** - Storage seam with PostgreSQL and in-memory backends
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication service and handlers
//! ├── catalog/        - Collection handlers
//! ├── store/          - UserStore / DocumentStore implementations
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the authentication service, the
//! document store and the configuration. Nothing in it is mutable: all
//! mutable data lives in the store, and each request talks to the store at
//! most once per operation.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Catalog collections (courses, instructors, books, reviews)
pub mod catalog;

/// Storage seam
pub mod store;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
