//! Car inventory records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;
use crate::validation::{Bounds, FieldReader, ValidationError};

/// A car available for rent.
///
/// # Collection
///
/// Stored in the `car` collection.
///
/// # JSON Example
///
/// ```json
/// {
///   "brand": "Mercedes",
///   "model": "C-Class",
///   "year": 2022,
///   "transmission": "Automatic",
///   "seats": 5,
///   "fuel": "Petrol",
///   "price_per_day": 89.5,
///   "image_url": null,
///   "featured": true
/// }
/// ```
///
/// # Validation
///
/// - `year`: 1980 to 2100 inclusive
/// - `seats`: 1 to 9 inclusive
/// - `price_per_day`: zero or more
/// - `image_url`: optional, defaults to null
/// - `featured`: optional, defaults to false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Car brand, e.g. Mercedes
    pub brand: String,

    /// Model name, e.g. C-Class
    pub model: String,

    /// Manufacturing year
    pub year: i64,

    /// Automatic or Manual
    pub transmission: String,

    /// Number of seats
    pub seats: i64,

    /// Fuel type, e.g. Petrol, Diesel, Hybrid, Electric
    pub fuel: String,

    /// Daily rental price in USD
    pub price_per_day: f64,

    /// Marketing image URL
    pub image_url: Option<String>,

    /// Whether to highlight this car
    pub featured: bool,
}

impl Car {
    pub const YEAR: Bounds = Bounds::between(1980.0, 2100.0);
    pub const SEATS: Bounds = Bounds::between(1.0, 9.0);
    pub const PRICE_PER_DAY: Bounds = Bounds::at_least(0.0);
}

impl Schema for Car {
    const COLLECTION: &'static str = "car";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;
        let car = Car {
            brand: fields.required_string("brand"),
            model: fields.required_string("model"),
            year: fields.required_integer("year", Self::YEAR),
            transmission: fields.required_string("transmission"),
            seats: fields.required_integer("seats", Self::SEATS),
            fuel: fields.required_string("fuel"),
            price_per_day: fields.required_float("price_per_day", Self::PRICE_PER_DAY),
            image_url: fields.optional_string("image_url"),
            featured: fields.bool_or("featured", false),
        };
        fields.finish(car)
    }
}
