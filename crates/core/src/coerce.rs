//! Total coercion helpers for untyped payload fields.
//!
//! Telemetry clients have shipped every imaginable malformed value over the
//! protocol's lifetime, and partial telemetry is still worth storing. Each
//! helper therefore maps *any* input (absent, null, wrong-typed, garbage) to
//! a usable typed value and never returns an error. Fields coerce
//! independently: one bad field never takes the rest of the record with it.

use serde_json::Value;

/// Fallback classification label when the client supplies none.
pub const DEFAULT_LABEL: &str = "unknown";

/// Coerce to a non-negative integer counter, defaulting to `0`.
///
/// Accepts JSON numbers (floats truncate) and strings containing a number.
/// Counters and depths cannot go below zero, so negative input clamps to `0`.
pub fn int_or_zero(value: Option<&Value>) -> i32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    };
    parsed.unwrap_or(0).clamp(0, i32::MAX as i64) as i32
}

/// Coerce to an optional non-negative float metric.
///
/// `None` means "not recorded", which is a different fact from a measured
/// zero; callers must not conflate the two. Absent input, non-numeric
/// content, non-finite values, and negative values all resolve to `None`.
pub fn float_or_none(value: Option<&Value>) -> Option<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite() && *f >= 0.0)
}

/// Pass a structured field through verbatim, defaulting to JSON null.
///
/// The stored blob is opaque to this service; its shape is interpreted by
/// downstream consumers only.
pub fn blob_or_null(value: Option<&Value>) -> Value {
    value.cloned().unwrap_or(Value::Null)
}

/// Pass a structured field through verbatim, defaulting to an empty array.
///
/// Used for the ad event sequences, which downstream consumers iterate; an
/// empty sequence saves them a null check.
pub fn blob_or_empty_array(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(v) => v.clone(),
    }
}

/// Coerce the classification label, defaulting to [`DEFAULT_LABEL`].
pub fn label_or_unknown(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => DEFAULT_LABEL.to_string(),
    }
}
