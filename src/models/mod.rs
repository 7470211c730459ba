//! Record schemas and the store identifier type.
//!
//! Each record type maps to one collection in the document store and knows how to validate
//! itself from a raw JSON payload.

/// Bookings collection schema
pub mod booking;
/// Cars collection schema
pub mod car;
/// Store-assigned document identifiers
pub mod document;
/// Products collection schema (not exposed over HTTP)
pub mod product;
/// Users collection schema (not exposed over HTTP)
pub mod user;

use serde::Serialize;
use serde_json::Value;

use crate::validation::ValidationError;

use self::{booking::Booking, car::Car, product::Product, user::User};

/// A record type that can be validated from raw input and persisted in its own collection.
pub trait Schema: Serialize + Sized {
    /// Name of the collection records of this type are stored in.
    const COLLECTION: &'static str;

    /// Validate a raw JSON payload into a fully-populated record.
    ///
    /// Absent optional fields take their declared defaults. Unknown fields are dropped.
    fn validate(raw: &Value) -> Result<Self, ValidationError>;
}

/// Names of the record types known to the schema layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Car,
    Booking,
    // Schema-only: no endpoint stores these
    #[allow(dead_code)]
    User,
    #[allow(dead_code)]
    Product,
}

impl RecordKind {
    pub fn collection(self) -> &'static str {
        match self {
            RecordKind::Car => Car::COLLECTION,
            RecordKind::Booking => Booking::COLLECTION,
            RecordKind::User => User::COLLECTION,
            RecordKind::Product => Product::COLLECTION,
        }
    }
}

/// A validated record of any known type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Car(Car),
    Booking(Booking),
    User(User),
    Product(Product),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Car(_) => RecordKind::Car,
            Record::Booking(_) => RecordKind::Booking,
            Record::User(_) => RecordKind::User,
            Record::Product(_) => RecordKind::Product,
        }
    }
}

/// Validate `raw` against the schema named by `kind`.
pub fn validate(kind: RecordKind, raw: &Value) -> Result<Record, ValidationError> {
    Ok(match kind {
        RecordKind::Car => Record::Car(Car::validate(raw)?),
        RecordKind::Booking => Record::Booking(Booking::validate(raw)?),
        RecordKind::User => Record::User(User::validate(raw)?),
        RecordKind::Product => Record::Product(Product::validate(raw)?),
    })
}
