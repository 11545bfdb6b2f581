/**
 * Catalog Handlers
 *
 * Single-step pass-throughs from HTTP to a `DocumentStore` collection. Each
 * operation is written once over a `Collection` and exposed through a thin
 * handler per route.
 *
 * # Responses
 *
 * - insert: `{"result": {"acknowledged": true, "insertedId": "<id>"}, "success": true}`
 * - list: array of documents
 * - get / update: the document, 404 when missing, 400 for a malformed id
 * - delete: `{"success": true, "message": "Instructor deleted successfully"}`
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::backend::auth::MessageResponse;
use crate::backend::catalog::collection::{document_fields, parse_id, Collection, Document};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::store::DocumentStore;

/// Outcome of an insert
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsertResult {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: Uuid,
}

/// Insert response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsertResponse {
    pub result: InsertResult,
    pub success: bool,
}

type Documents = State<Arc<dyn DocumentStore>>;

/// Insert one document into `collection`
pub async fn insert_into(
    store: &dyn DocumentStore,
    collection: Collection,
    body: Value,
) -> Result<InsertResponse, BackendError> {
    let fields = document_fields(body)?;
    let document = store.insert_document(collection, fields).await?;
    tracing::info!(collection = collection.as_str(), id = %document.id, "document inserted");

    Ok(InsertResponse {
        result: InsertResult {
            acknowledged: true,
            inserted_id: document.id,
        },
        success: true,
    })
}

/// Every document in `collection`
pub async fn list_from(
    store: &dyn DocumentStore,
    collection: Collection,
) -> Result<Vec<Document>, BackendError> {
    Ok(store.find_documents(collection).await?)
}

/// One document by its path identifier
pub async fn get_from(
    store: &dyn DocumentStore,
    collection: Collection,
    raw_id: &str,
) -> Result<Document, BackendError> {
    let id = parse_id(raw_id)?;
    store
        .find_document(collection, id)
        .await?
        .ok_or_else(|| not_found(collection))
}

/// Merge `body` into an existing document
pub async fn update_in(
    store: &dyn DocumentStore,
    collection: Collection,
    raw_id: &str,
    body: Value,
) -> Result<Document, BackendError> {
    let id = parse_id(raw_id)?;
    let fields = document_fields(body)?;
    let document = store
        .update_document(collection, id, fields)
        .await?
        .ok_or_else(|| not_found(collection))?;
    tracing::info!(collection = collection.as_str(), %id, "document updated");
    Ok(document)
}

/// Delete one document
pub async fn delete_from(
    store: &dyn DocumentStore,
    collection: Collection,
    raw_id: &str,
) -> Result<MessageResponse, BackendError> {
    let id = parse_id(raw_id)?;
    if !store.delete_document(collection, id).await? {
        return Err(not_found(collection));
    }
    tracing::info!(collection = collection.as_str(), %id, "document deleted");
    Ok(MessageResponse::ok(format!("{} deleted successfully", collection.noun())))
}

fn not_found(collection: Collection) -> BackendError {
    BackendError::not_found(format!("{} not found", collection.noun()))
}

// Courses

pub async fn create_course(
    State(store): Documents,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<InsertResponse>, BackendError> {
    insert_into(store.as_ref(), Collection::Courses, body).await.map(Json)
}

pub async fn list_courses(State(store): Documents) -> Result<Json<Vec<Document>>, BackendError> {
    list_from(store.as_ref(), Collection::Courses).await.map(Json)
}

pub async fn get_course(
    State(store): Documents,
    Path(id): Path<String>,
) -> Result<Json<Document>, BackendError> {
    get_from(store.as_ref(), Collection::Courses, &id).await.map(Json)
}

// Instructors

pub async fn create_instructor(
    State(store): Documents,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<InsertResponse>, BackendError> {
    insert_into(store.as_ref(), Collection::Instructors, body).await.map(Json)
}

pub async fn list_instructors(State(store): Documents) -> Result<Json<Vec<Document>>, BackendError> {
    list_from(store.as_ref(), Collection::Instructors).await.map(Json)
}

pub async fn update_instructor(
    State(store): Documents,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<Document>, BackendError> {
    update_in(store.as_ref(), Collection::Instructors, &id, body).await.map(Json)
}

pub async fn delete_instructor(
    State(store): Documents,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    delete_from(store.as_ref(), Collection::Instructors, &id).await.map(Json)
}

// Books

pub async fn list_books(State(store): Documents) -> Result<Json<Vec<Document>>, BackendError> {
    list_from(store.as_ref(), Collection::Books).await.map(Json)
}

pub async fn get_book(
    State(store): Documents,
    Path(id): Path<String>,
) -> Result<Json<Document>, BackendError> {
    get_from(store.as_ref(), Collection::Books, &id).await.map(Json)
}

// Reviews

pub async fn create_review(
    State(store): Documents,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<InsertResponse>, BackendError> {
    insert_into(store.as_ref(), Collection::Reviews, body).await.map(Json)
}

pub async fn list_reviews(State(store): Documents) -> Result<Json<Vec<Document>>, BackendError> {
    list_from(store.as_ref(), Collection::Reviews).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::{MemoryStore, StoreError};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Map};

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn insert_document(
            &self,
            _collection: Collection,
            _body: Map<String, Value>,
        ) -> Result<Document, StoreError> {
            Err(StoreError::Unavailable("timed out".to_string()))
        }

        async fn find_documents(&self, _collection: Collection) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Unavailable("timed out".to_string()))
        }

        async fn find_document(
            &self,
            _collection: Collection,
            _id: Uuid,
        ) -> Result<Option<Document>, StoreError> {
            Err(StoreError::Unavailable("timed out".to_string()))
        }

        async fn update_document(
            &self,
            _collection: Collection,
            _id: Uuid,
            _fields: Map<String, Value>,
        ) -> Result<Option<Document>, StoreError> {
            Err(StoreError::Unavailable("timed out".to_string()))
        }

        async fn delete_document(&self, _collection: Collection, _id: Uuid) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = MemoryStore::new();
        let inserted = insert_into(&store, Collection::Courses, json!({"title": "Rust 101"}))
            .await
            .unwrap();
        assert!(inserted.success);
        assert!(inserted.result.acknowledged);

        let id = inserted.result.inserted_id.to_string();
        let document = get_from(&store, Collection::Courses, &id).await.unwrap();
        assert_eq!(document.body["title"], "Rust 101");
    }

    #[tokio::test]
    async fn test_insert_response_shape() {
        let store = MemoryStore::new();
        let inserted = insert_into(&store, Collection::Reviews, json!({"rating": 5})).await.unwrap();
        let value = serde_json::to_value(&inserted).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result"]["acknowledged"], true);
        assert_eq!(value["result"]["insertedId"], inserted.result.inserted_id.to_string());
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = insert_into(&store, Collection::Courses, json!(["a"])).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_invalid_and_missing_id() {
        let store = MemoryStore::new();

        let err = get_from(&store, Collection::Books, "nope").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = get_from(&store, Collection::Books, &Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Book not found");
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryStore::new();
        let inserted = insert_into(
            &store,
            Collection::Instructors,
            json!({"name": "Grace", "subject": "COBOL"}),
        )
        .await
        .unwrap();
        let id = inserted.result.inserted_id.to_string();

        let updated = update_in(&store, Collection::Instructors, &id, json!({"subject": "Compilers"}))
            .await
            .unwrap();
        assert_eq!(updated.body["name"], "Grace");
        assert_eq!(updated.body["subject"], "Compilers");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let inserted = insert_into(&store, Collection::Instructors, json!({"name": "Grace"}))
            .await
            .unwrap();
        let id = inserted.result.inserted_id.to_string();

        let response = delete_from(&store, Collection::Instructors, &id).await.unwrap();
        assert_eq!(response, MessageResponse::ok("Instructor deleted successfully"));

        let err = delete_from(&store, Collection::Instructors, &id).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Instructor not found");
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let err = list_from(&FailingStore, Collection::Courses).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }
}
