//! Timestamp reconciliation.
//!
//! Clients have supplied session times as ISO-8601 with an offset, as naive
//! offset-less strings, and not at all. The canonical stored instant is
//! always UTC: naive inputs are taken as already-UTC rather than guessing a
//! local offset, and an unusable input degrades to the ingestion instant
//! instead of rejecting the event.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde_json::Value;

/// Fixed reporting offset for the derived display string (UTC+05:30).
const REPORTING_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Format of the derived display string: `DD-MM-YYYY HH:MM`.
const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Naive (offset-less) formats observed from older clients.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolve the canonical UTC instant for a session.
///
/// `now` is the ingestion instant, used as the fallback for absent,
/// non-string, or unparsable input; callers pass it in so resolution stays
/// deterministic under test.
pub fn resolve_occurred_at(raw: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(Value::String(s)) = raw else {
        return now;
    };
    parse_instant(s.trim()).unwrap_or(now)
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less inputs are assumed to already be UTC.
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render the display string for a canonical instant in the fixed reporting
/// offset.
///
/// Purely presentational: recomputed from `occurred_at` on every ingest,
/// never accepted from the client.
pub fn local_display_time(at: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(REPORTING_OFFSET_SECS).expect("reporting offset is in range");
    at.with_timezone(&offset).format(DISPLAY_FORMAT).to_string()
}
