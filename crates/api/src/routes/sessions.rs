//! Route definitions for session telemetry ingestion.
//!
//! ```text
//! POST /log_session    -> log_session
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Ingestion routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/log_session", post(sessions::log_session))
}
