//! The `sessions` table row.

use beacon_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sessions` table: one normalized record per session.
///
/// Written exactly once at ingestion and never mutated. `occurred_at` is the
/// canonical timezone-aware instant; `local_display_time` is derived from it
/// and is not authoritative. The JSONB blobs are stored verbatim and carry
/// no shape guarantees.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionRow {
    pub session_id: String,
    pub label: String,
    pub occurred_at: Timestamp,
    pub local_display_time: String,
    pub mouse_path: serde_json::Value,
    pub scroll_depth: i32,
    pub click_delay: Option<f64>,
    pub click_positions: serde_json::Value,
    pub total_clicks: i32,
    pub ad_clicks: i32,
    pub hover_times: serde_json::Value,
    pub session_duration: Option<f64>,
    pub fingerprint: serde_json::Value,
    pub ad_hover_time: Option<f64>,
    pub ad_visible_time: Option<f64>,
    pub ad_click_coordinates: serde_json::Value,
    pub ad_visibility_changes: serde_json::Value,
    pub ad_dwell_time: Option<f64>,
    pub ad_click_accuracy: Option<f64>,
    pub repeated_ad_clicks: i32,
    pub scroll_to_ad_time: Option<f64>,
}
