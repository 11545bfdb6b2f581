/**
 * Catalog Collections and Documents
 *
 * Courses, instructors, books and reviews carry no invariants beyond "is a
 * JSON object". A `Document` is that object plus the identifier the store
 * assigned to it, serialized back to clients under `_id`.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::shared::SharedError;

/// A named document collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Courses,
    Instructors,
    Books,
    Reviews,
}

impl Collection {
    /// Name of the collection in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Courses => "courses",
            // Singular, as the collection has always been named
            Self::Instructors => "instructor",
            Self::Books => "books",
            Self::Reviews => "reviews",
        }
    }

    /// Human-readable singular noun used in response messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Courses => "Course",
            Self::Instructors => "Instructor",
            Self::Books => "Book",
            Self::Reviews => "Review",
        }
    }
}

/// A stored document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Document {
    /// Identifier assigned on insert
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// The document's own fields
    #[serde(flatten)]
    pub body: Map<String, Value>,
    /// Insertion time, used for ordering only
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Turn a request body into storable document fields.
///
/// Only JSON objects are accepted. A client-supplied `_id` is dropped so the
/// store stays the sole source of identifiers.
pub fn document_fields(value: Value) -> Result<Map<String, Value>, SharedError> {
    match value {
        Value::Object(mut map) => {
            map.remove("_id");
            Ok(map)
        }
        _ => Err(SharedError::validation("body", "document must be a JSON object")),
    }
}

/// Parse a path identifier
pub fn parse_id(raw: &str) -> Result<Uuid, SharedError> {
    Uuid::parse_str(raw).map_err(|_| SharedError::validation("id", format!("Invalid id '{}'", raw)))
}
