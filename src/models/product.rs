//! Product records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;
use crate::validation::{Bounds, FieldReader, ValidationError};

/// Products collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,

    pub description: Option<String>,

    /// Price in dollars, zero or more
    pub price: f64,

    pub category: String,

    /// Whether product is in stock (defaults to true)
    pub in_stock: bool,
}

impl Schema for Product {
    const COLLECTION: &'static str = "product";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;
        let product = Product {
            title: fields.required_string("title"),
            description: fields.optional_string("description"),
            price: fields.required_float("price", Bounds::at_least(0.0)),
            category: fields.required_string("category"),
            in_stock: fields.bool_or("in_stock", true),
        };
        fields.finish(product)
    }
}
