//! HTTP request handlers (route handlers).
//!
//! Each handler:
//! 1. Receives HTTP request data (JSON body, query string)
//! 2. Validates it against the record schema
//! 3. Calls exactly one document store operation
//! 4. Returns a JSON response, or a flat 500 error

/// Booking endpoints
pub mod bookings;
/// Car inventory endpoints
pub mod cars;
/// Store handle check
pub mod health;

use serde::Serialize;

/// Body returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Store-assigned identifier of the new document, as a string
    pub id: String,
}
