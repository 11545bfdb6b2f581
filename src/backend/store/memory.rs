//! In-memory store
//!
//! Backs tests and database-less development runs. Data is lost when the
//! process exits.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::collection::{Collection, Document};
use crate::backend::store::{DocumentStore, StoreError, UserStore};

/// Store holding everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    documents: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        match users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
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
        self.documents
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn update_document(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<Option<Document>, StoreError> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
        else {
            return Ok(None);
        };
        document.body.extend(fields);
        Ok(Some(document.clone()))
    }

    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        let Some(docs) = documents.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::Role;
    use serde_json::json;
    use std::sync::Arc;

    fn user(email: &str) -> User {
        User::new_student(None, None, None, email.to_string(), "hash".to_string())
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let store = MemoryStore::new();
        store.insert_user(&user("a@x.com")).await.unwrap();

        let found = store.find_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.role, Role::Student);
        assert!(store.find_user_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.insert_user(&user("a@x.com")).await.unwrap();

        let err = store.insert_user(&user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert_user(&user("race@x.com")).await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_document_lifecycle() {
        let store = MemoryStore::new();
        let doc = store
            .insert_document(Collection::Instructors, object(json!({"name": "Ada"})))
            .await
            .unwrap();

        let all = store.find_documents(Collection::Instructors).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(store.find_documents(Collection::Courses).await.unwrap().is_empty());

        let updated = store
            .update_document(Collection::Instructors, doc.id, object(json!({"title": "Dr"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.body["name"], "Ada");
        assert_eq!(updated.body["title"], "Dr");

        assert!(store.delete_document(Collection::Instructors, doc.id).await.unwrap());
        assert!(!store.delete_document(Collection::Instructors, doc.id).await.unwrap());
        assert!(store
            .find_document(Collection::Instructors, doc.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        let doc = store
            .insert_document(Collection::Books, object(json!({"title": "Rust"})))
            .await
            .unwrap();
        assert!(store
            .find_document(Collection::Courses, doc.id)
            .await
            .unwrap()
            .is_none());
    }
}
