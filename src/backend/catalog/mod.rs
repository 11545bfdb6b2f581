//! Catalog Module
//!
//! Courses, instructors, books and reviews. Each route is a single call to
//! the document store; there is no validation beyond "the body is a JSON
//! object".
//!
//! - **`collection`** - `Collection`, `Document` and body / id parsing
//! - **`handlers`** - HTTP handlers for the catalog routes

/// Collections and documents
pub mod collection;

/// HTTP handlers for catalog endpoints
pub mod handlers;

pub use collection::{Collection, Document};
pub use handlers::*;
