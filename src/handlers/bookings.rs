//! Booking HTTP handlers.
//!
//! - POST /bookings - Validate and store a booking

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use super::CreatedResponse;
use crate::{
    error::AppError,
    models::{self, RecordKind},
    state::AppState,
    store,
};

/// Create a booking.
///
/// The referenced `car_id` is stored as given; it is not looked up, and no availability or
/// overlap check is made against other bookings.
///
/// # Request Body
///
/// ```json
/// {
///   "car_id": "9b2f0c6e3d5a4c1e8f7a6b5c4d3e2f1a",
///   "full_name": "Grace Hopper",
///   "email": "grace@example.com",
///   "pickup_location": "Munich Airport",
///   "dropoff_location": "Munich Central",
///   "pickup_date": "2026-11-02",
///   "dropoff_date": "2026-11-09",
///   "notes": "Child seat please"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"id": "<string>"}`
/// - **Error (500)**: `{"detail": "<message>"}`
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Json(raw) = payload?;
    let record = models::validate(RecordKind::Booking, &raw)?;

    let id = store::insert_record(state.store()?, &record).await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}
