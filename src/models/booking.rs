//! Customer booking records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;
use crate::validation::{FieldReader, ValidationError};

/// A customer booking.
///
/// # Collection
///
/// Stored in the `booking` collection.
///
/// `car_id` is an opaque string: it is not checked against existing cars, and the pickup and
/// dropoff dates are stored exactly as sent. Bookings for the same car may overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// ID of the car being booked
    pub car_id: String,

    /// Customer full name
    pub full_name: String,

    /// Customer email
    pub email: String,

    pub pickup_location: String,

    pub dropoff_location: String,

    /// ISO date for pickup
    pub pickup_date: String,

    /// ISO date for dropoff
    pub dropoff_date: String,

    /// Optional notes for the booking
    pub notes: Option<String>,
}

impl Schema for Booking {
    const COLLECTION: &'static str = "booking";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;
        let booking = Booking {
            car_id: fields.required_string("car_id"),
            full_name: fields.required_string("full_name"),
            email: fields.required_string("email"),
            pickup_location: fields.required_string("pickup_location"),
            dropoff_location: fields.required_string("dropoff_location"),
            pickup_date: fields.required_string("pickup_date"),
            dropoff_date: fields.required_string("dropoff_date"),
            notes: fields.optional_string("notes"),
        };
        fields.finish(booking)
    }
}
