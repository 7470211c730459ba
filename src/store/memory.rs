//! In-memory document store used by handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, Filter, StoreError};
use crate::models::document::{Document, DocumentId};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches(filter: &Filter, fields: &Map<String, Value>) -> bool {
    filter
        .fields()
        .iter()
        .all(|(key, expected)| fields.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        let id = DocumentId::from(Uuid::new_v4());
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document { id, fields });
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        let limit = limit.map_or(usize::MAX, |l| l as usize);

        Ok(documents
            .iter()
            .filter(|doc| matches(filter, &doc.fields))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn filter_requires_every_key_to_match_exactly() {
        let store = MemoryStore::new();
        store
            .insert("car", fields(json!({ "brand": "Mercedes", "featured": true })))
            .await
            .unwrap();
        store
            .insert("car", fields(json!({ "brand": "Mercedes" })))
            .await
            .unwrap();
        store
            .insert("car", fields(json!({ "brand": "mercedes", "featured": true })))
            .await
            .unwrap();

        let found = store
            .find(
                "car",
                &Filter::new().field_eq("brand", "Mercedes").field_eq("featured", true),
                None,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields["brand"], json!("Mercedes"));
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::new();
        let found = store.find("car", &Filter::new(), Some(20)).await.unwrap();

        assert!(found.is_empty());
        assert_eq!(store.count("car").await, 0);
    }
}
