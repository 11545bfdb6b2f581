/**
 * PostgreSQL Store
 *
 * `UserStore` and `DocumentStore` over a `sqlx` connection pool. Users live in
 * the `users` table (unique on email); catalog documents live in a single
 * `documents` table as JSONB, partitioned by a `collection` column.
 *
 * Every query runs under `tokio::time::timeout`. A timeout, a connection
 * failure, or any database error other than a unique violation surfaces as
 * `StoreError::Unavailable`.
 */

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::collection::{Collection, Document};
use crate::backend::store::{DocumentStore, StoreError, UserStore};

/// PostgreSQL-backed store
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Connect to `database_url`, bounding connection acquisition by `timeout`
    pub async fn connect(database_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(timeout)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool, timeout))
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(format!("migration failed: {}", e)))
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::error!(op, timeout = ?self.timeout, "store call timed out");
                Err(StoreError::Unavailable(format!(
                    "{} timed out after {:?}",
                    op, self.timeout
                )))
            }
        }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        image: row.try_get("image")?,
        user_name: row.try_get("user_name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: role
            .parse()
            .map_err(|_| StoreError::Corrupt(format!("unknown role '{}'", role)))?,
        created_at: row.try_get("created_at")?,
    })
}

fn document_from_row(row: &PgRow) -> Result<Document, StoreError> {
    let Json(body): Json<Map<String, Value>> = row.try_get("body")?;
    Ok(Document {
        id: row.try_get("id")?,
        body,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = self
            .bounded(
                "find_user_by_email",
                sqlx::query(
                    r#"
                    SELECT id, name, image, user_name, email, password_hash, role, created_at
                    FROM users
                    WHERE email = $1
                    "#,
                )
                .bind(email)
                .fetch_optional(&self.pool),
            )
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.bounded(
            "insert_user",
            sqlx::query(
                r#"
                INSERT INTO users (id, name, image, user_name, email, password_hash, role, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.image)
            .bind(&user.user_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert_document(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let document = Document {
            id: Uuid::new_v4(),
            body,
            created_at: Utc::now(),
        };

        self.bounded(
            "insert_document",
            sqlx::query(
                r#"
                INSERT INTO documents (id, collection, body, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(document.id)
            .bind(collection.as_str())
            .bind(Json(&document.body))
            .bind(document.created_at)
            .execute(&self.pool),
        )
        .await?;

        Ok(document)
    }

    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows = self
            .bounded(
                "find_documents",
                sqlx::query(
                    r#"
                    SELECT id, body, created_at
                    FROM documents
                    WHERE collection = $1
                    ORDER BY created_at ASC
                    "#,
                )
                .bind(collection.as_str())
                .fetch_all(&self.pool),
            )
            .await?;

        rows.iter().map(document_from_row).collect()
    }

    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let row = self
            .bounded(
                "find_document",
                sqlx::query(
                    r#"
                    SELECT id, body, created_at
                    FROM documents
                    WHERE collection = $1 AND id = $2
                    "#,
                )
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        row.as_ref().map(document_from_row).transpose()
    }

    async fn update_document(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError> {
        // jsonb || jsonb replaces top-level keys and keeps the rest
        let row = self
            .bounded(
                "update_document",
                sqlx::query(
                    r#"
                    UPDATE documents
                    SET body = body || $3
                    WHERE collection = $1 AND id = $2
                    RETURNING id, body, created_at
                    "#,
                )
                .bind(collection.as_str())
                .bind(id)
                .bind(Json(&fields))
                .fetch_optional(&self.pool),
            )
            .await?;

        row.as_ref().map(document_from_row).transpose()
    }

    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError> {
        let result = self
            .bounded(
                "delete_document",
                sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
                    .bind(collection.as_str())
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
