//! Application-level error type for HTTP handlers.
//!
//! The ingestion contract is deliberately coarse: field-level problems are
//! absorbed by coercion and duplicates by the idempotent store, so there is
//! no bad-request variant. The only fault that crosses the boundary is the
//! store being unavailable or otherwise failing.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full diagnostic context stays server-side; the client sees an
        // opaque indicator with no internal detail.
        match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "Store fault during ingestion");
            }
        }

        let body = json!({
            "ok": false,
            "error": "internal error",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
