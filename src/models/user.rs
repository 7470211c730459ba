//! User records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;
use crate::validation::{Bounds, FieldReader, ValidationError};

/// Users collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Full name
    pub name: String,

    pub email: String,

    pub address: String,

    /// Age in years, 0 to 120
    pub age: Option<i64>,

    /// Whether user is active (defaults to true)
    pub is_active: bool,
}

impl Schema for User {
    const COLLECTION: &'static str = "user";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;
        let user = User {
            name: fields.required_string("name"),
            email: fields.required_string("email"),
            address: fields.required_string("address"),
            age: fields.optional_integer("age", Bounds::between(0.0, 120.0)),
            is_active: fields.bool_or("is_active", true),
        };
        fields.finish(user)
    }
}
