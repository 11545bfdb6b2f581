//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server, one submodule per
//! area.
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - Authentication endpoints
//! - **`catalog_routes`** - Course, instructor, book and review endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation
//! ├── api_routes.rs      - Authentication endpoints
//! └── catalog_routes.rs  - Catalog endpoints
//! ```

/// Main router creation
pub mod router;

/// Authentication endpoints
pub mod api_routes;

/// Catalog endpoints
pub mod catalog_routes;

pub use router::create_router;
