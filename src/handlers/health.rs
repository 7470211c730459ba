//! Store handle check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Response of `GET /test`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    /// Whether the document store handle was initialized at startup
    pub ok: bool,
}

/// Report whether the store handle exists.
///
/// This never touches the database, so it answers even when the database is unreachable.
///
/// # Response (200 OK)
///
/// ```json
/// { "ok": true }
/// ```
pub async fn store_check(State(state): State<AppState>) -> Json<TestResponse> {
    Json(TestResponse {
        ok: state.has_store(),
    })
}
