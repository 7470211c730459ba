//! Car inventory HTTP handlers.
//!
//! - POST /cars - Validate and store a new car
//! - GET /cars - List cars, optionally filtered by brand and featured flag

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use super::CreatedResponse;
use crate::{
    error::AppError,
    models::{self, RecordKind, document::Document},
    state::AppState,
    store::{self, Filter},
};

/// Query parameters accepted by `GET /cars`.
#[derive(Debug, Deserialize)]
pub struct ListCarsQuery {
    /// Exact brand match; an empty value applies no filter
    pub brand: Option<String>,

    /// Exact featured flag match; accepts the usual spellings (see [`parse_flag`])
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: Option<bool>,

    /// Maximum number of cars returned (defaults to 20, 0 means no limit).
    /// A negative limit caps the result at its absolute value.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// Parse a query-string boolean, ignoring case.
///
/// `true`/`t`/`yes`/`y`/`on`/`1` are true, `false`/`f`/`no`/`n`/`off`/`0` are false.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_flag(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&raw), &"a boolean"))
}

impl ListCarsQuery {
    fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if let Some(brand) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            filter = filter.field_eq("brand", brand);
        }
        if let Some(featured) = self.featured {
            filter = filter.field_eq("featured", featured);
        }
        filter
    }

    fn limit(&self) -> Option<u32> {
        match self.limit.unsigned_abs() {
            0 => None,
            n => Some(u32::try_from(n).unwrap_or(u32::MAX)),
        }
    }
}

/// Create a car.
///
/// # Request Body
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
///   "featured": true
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"id": "<string>"}`
/// - **Error (500)**: `{"detail": "<message>"}` for invalid input or store failure
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Json(raw) = payload?;
    let record = models::validate(RecordKind::Car, &raw)?;

    let id = store::insert_record(state.store()?, &record).await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List cars.
///
/// # Query Parameters
///
/// - `brand`: exact match on brand
/// - `featured`: exact match; `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` and similar
/// - `limit`: maximum number of results (default 20, 0 for all, negative values use their
///   absolute value)
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": "9b2f0c6e3d5a4c1e8f7a6b5c4d3e2f1a",
///     "brand": "Mercedes",
///     "model": "C-Class",
///     "year": 2022,
///     "transmission": "Automatic",
///     "seats": 5,
///     "fuel": "Petrol",
///     "price_per_day": 89.5,
///     "image_url": null,
///     "featured": true
///   }
/// ]
/// ```
pub async fn list_cars(
    State(state): State<AppState>,
    query: Result<Query<ListCarsQuery>, QueryRejection>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Query(query) = query?;

    let documents = store::find_records(
        state.store()?,
        RecordKind::Car,
        &query.filter(),
        query.limit(),
    )
    .await?;

    // Store ids leave the system only as strings
    Ok(Json(documents.into_iter().map(Document::into_json).collect()))
}
