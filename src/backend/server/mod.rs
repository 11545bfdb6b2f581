//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Environment configuration and store selection
//! - **`init`** - Application assembly
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment loading, store selection
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `load_config` reads the environment
//! 2. **Store Selection**: PostgreSQL when `DATABASE_URL` is set, memory otherwise
//! 3. **State Creation**: `AuthService` and the document store go into `AppState`
//! 4. **Router Creation**: all routes and layers are configured
//!
//! # Example
//!
//! ```rust,no_run
//! use hoco_education::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_config, load_store, Stores};
pub use init::{build_state, create_app, create_app_with};
pub use state::AppState;
