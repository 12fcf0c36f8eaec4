//! Handlers for session telemetry ingestion.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::Value;

use beacon_core::session::NormalizedSession;
use beacon_db::repositories::{PutOutcome, SessionRepo};

use crate::error::AppResult;
use crate::response::Ack;
use crate::state::AppState;

/// POST /log_session
///
/// Accept one session telemetry payload and record it at most once.
///
/// The body is read as raw bytes and parsed leniently: telemetry arrives via
/// `navigator.sendBeacon`, which not every browser tags with a JSON
/// content-type, and a body that fails to parse still records a best-effort
/// session rather than being dropped. Field-level problems are absorbed by
/// coercion and duplicates by the store; the only failure surfaced here is a
/// store fault.
pub async fn log_session(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let session = NormalizedSession::from_payload(&payload, Utc::now());

    match SessionRepo::insert_if_absent(&state.pool, &session).await? {
        PutOutcome::Inserted => {
            tracing::info!(
                session_id = %session.session_id,
                label = %session.label,
                "Session recorded"
            );
        }
        PutOutcome::Skipped => {
            tracing::info!(
                session_id = %session.session_id,
                "Session already recorded, submission skipped"
            );
        }
    }

    Ok(Json(Ack::ok()))
}
