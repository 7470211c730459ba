//! Error types and HTTP error response handling.
//!
//! Every failure a handler can hit is converted here into one flat response:
//! status 500 with `{"detail": "<message>"}`. Validation failures and store failures are not
//! distinguished on the wire.
//!
//! Store error text is returned to the client unmodified, which can leak internal details such
//! as connection errors. A production deployment should redact it.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{store::StoreError, validation::ValidationError};

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body failed its schema rules.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The document store could not be reached or rejected the operation.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Request body was not readable JSON.
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    /// Query string could not be parsed (e.g. `featured=maybe`).
    #[error("{0}")]
    InvalidQuery(#[from] QueryRejection),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "detail": "brand: field required"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        tracing::error!(error = %detail, "Request failed");

        let body = Json(json!({ "detail": detail }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
