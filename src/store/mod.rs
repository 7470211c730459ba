//! Collection-addressed document storage.
//!
//! The rest of the application talks to the store only through [`DocumentStore`]: insert one
//! document into a named collection, or find documents in a collection by exact field match.
//! Identifiers are generated by the store and handed back as [`DocumentId`]s.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::models::{
    Record, RecordKind,
    document::{Document, DocumentId},
};

/// Errors raised by the persistence layer.
///
/// Messages are passed through verbatim to API clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No store handle was configured at startup.
    #[error("Database not available. Check DATABASE_URL environment variable.")]
    Unavailable,

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The `documents` schema could not be created or updated.
    #[error("{0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A record could not be encoded as a JSON document.
    #[error("{0}")]
    Encode(#[from] serde_json::Error),
}

/// Exact-match filter: a document matches when every filter field is present in it with an
/// equal value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Map<String, Value>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    pub fn field_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Document storage addressed by collection name.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one document to `collection` and return its newly assigned identifier.
    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError>;

    /// Documents in `collection` matching `filter`, in insertion order.
    ///
    /// At most `limit` documents are returned; `None` returns every match. No match is an empty
    /// result, not an error.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, StoreError>;
}

/// Persist a validated record in the collection for its type.
pub async fn insert_record(
    store: &dyn DocumentStore,
    record: &Record,
) -> Result<DocumentId, StoreError> {
    let fields = match serde_json::to_value(record)? {
        Value::Object(fields) => fields,
        // Every record type serializes to a JSON object
        other => {
            return Err(StoreError::Encode(serde::ser::Error::custom(format!(
                "record did not encode as an object: {other}"
            ))));
        }
    };
    store.insert(record.kind().collection(), fields).await
}

/// Find records of `kind` matching `filter`.
pub async fn find_records(
    store: &dyn DocumentStore,
    kind: RecordKind,
    filter: &Filter,
    limit: Option<u32>,
) -> Result<Vec<Document>, StoreError> {
    store.find(kind.collection(), filter, limit).await
}
