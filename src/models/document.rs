//! Store-assigned document identifiers.
//!
//! A `DocumentId` only exists on the persistence side. Validated records never carry one; it is
//! turned into a plain string when a response is serialized.

use std::fmt;

use serde_json::{Map, Value};
use uuid::Uuid;

/// Opaque identifier generated by the document store for each inserted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A persisted document as returned by the store: its identifier plus its stored fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Flatten into a JSON object with the identifier exposed as a string `id` field.
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id.to_string()));
        Value::Object(fields)
    }
}
