//! Storage Module
//!
//! The backend talks to persistence only through the two traits defined
//! here. `UserStore` is the User Record Store addressed by email;
//! `DocumentStore` holds the free-form catalog collections.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, backed by `sqlx` with every call bounded by
//!   a timeout
//! - **`memory`** - `MemoryStore`, used by tests and when no database is
//!   configured
//!
//! # Uniqueness
//!
//! `insert_user` must be atomic with respect to the email: two concurrent
//! inserts for the same address yield one `Ok(())` and one
//! `StoreError::Duplicate`. PostgreSQL gets this from the `UNIQUE` index on
//! `users.email`, the memory store from holding its write lock across the
//! check and the insert.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::collection::{Collection, Document};

/// PostgreSQL implementation
pub mod postgres;

/// In-memory implementation
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same unique key already exists
    #[error("record already exists")]
    Duplicate,

    /// The store could not be reached, failed, or timed out
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A persisted record could not be decoded
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Corrupt(err.to_string())
            }
            _ => Self::Unavailable(err.to_string()),
        }
    }
}

/// Persisted user records, keyed by email
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user with exactly this email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user, failing with `StoreError::Duplicate` if the email
    /// is already taken
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
}

/// Free-form document collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return it with its assigned identifier
    async fn insert_document(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<Document, StoreError>;

    /// All documents of a collection in insertion order
    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// One document by identifier
    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError>;

    /// Merge `fields` into an existing document, returning the updated one
    async fn update_document(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError>;

    /// Delete one document, returning whether anything was removed
    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError>;
}
