//! Session normalization: the payload-to-record pipeline.
//!
//! [`NormalizedSession::from_payload`] is the single entry point. It runs the
//! coercion and timestamp layers over a loosely-structured payload, applies
//! the cross-field consistency rules, and yields a record ready for the
//! idempotent store. It cannot fail: any payload, including a completely
//! unusable one, produces a storable record.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{coerce, timestamp};

/// A fully-typed session record, ready for persistence.
///
/// Produced exactly once per payload and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSession {
    pub session_id: String,
    pub label: String,
    /// Canonical UTC instant of the session.
    pub occurred_at: DateTime<Utc>,
    /// Derived display rendering of `occurred_at`; never authoritative.
    pub local_display_time: String,
    pub mouse_path: Value,
    pub scroll_depth: i32,
    pub click_delay: Option<f64>,
    pub click_positions: Value,
    pub total_clicks: i32,
    pub ad_clicks: i32,
    pub hover_times: Value,
    pub session_duration: Option<f64>,
    pub fingerprint: Value,
    pub ad_hover_time: Option<f64>,
    pub ad_visible_time: Option<f64>,
    pub ad_click_coordinates: Value,
    pub ad_visibility_changes: Value,
    pub ad_dwell_time: Option<f64>,
    pub ad_click_accuracy: Option<f64>,
    pub repeated_ad_clicks: i32,
    pub scroll_to_ad_time: Option<f64>,
}

impl NormalizedSession {
    /// Build a record from a loosely-structured payload.
    ///
    /// Every field coerces independently (see [`coerce`]); a malformed field
    /// never aborts the record. `now` is the ingestion instant used for
    /// timestamp fallback.
    ///
    /// A payload without a usable `session_id` gets a fresh UUID so the
    /// record is still storable. Such a submission cannot deduplicate
    /// against other submissions that also omitted the key.
    pub fn from_payload(payload: &Value, now: DateTime<Utc>) -> Self {
        let field = |key: &str| payload.get(key);

        let occurred_at = timestamp::resolve_occurred_at(field("timestamp"), now);

        let mut session = Self {
            session_id: session_id_or_fresh(field("session_id")),
            label: coerce::label_or_unknown(field("label")),
            occurred_at,
            local_display_time: timestamp::local_display_time(occurred_at),
            mouse_path: coerce::blob_or_null(field("mouse_path")),
            scroll_depth: coerce::int_or_zero(field("scroll_depth")),
            click_delay: coerce::float_or_none(field("click_delay")),
            click_positions: coerce::blob_or_null(field("click_positions")),
            total_clicks: coerce::int_or_zero(field("total_clicks")),
            ad_clicks: coerce::int_or_zero(field("ad_clicks")),
            hover_times: coerce::blob_or_null(field("hover_times")),
            session_duration: coerce::float_or_none(field("session_duration")),
            fingerprint: coerce::blob_or_null(field("fingerprint")),
            ad_hover_time: coerce::float_or_none(field("ad_hover_time")),
            ad_visible_time: coerce::float_or_none(field("ad_visible_time")),
            ad_click_coordinates: coerce::blob_or_empty_array(field("ad_click_coordinates")),
            ad_visibility_changes: coerce::blob_or_empty_array(field("ad_visibility_changes")),
            ad_dwell_time: coerce::float_or_none(field("ad_dwell_time")),
            ad_click_accuracy: coerce::float_or_none(field("ad_click_accuracy")),
            repeated_ad_clicks: coerce::int_or_zero(field("repeated_ad_clicks")),
            scroll_to_ad_time: coerce::float_or_none(field("scroll_to_ad_time")),
        };
        session.enforce_ad_consistency();
        session
    }

    /// Cross-field consistency: the ad-engagement quality metrics are only
    /// meaningful after an actual ad click. Without one, client-supplied
    /// values are noise and are dropped, whatever they claimed.
    fn enforce_ad_consistency(&mut self) {
        if self.ad_clicks == 0 {
            self.ad_dwell_time = None;
            self.ad_click_accuracy = None;
        }
    }
}

fn session_id_or_fresh(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn full_payload_maps_field_for_field() {
        let payload = json!({
            "session_id": "s1",
            "label": "human",
            "timestamp": "2024-01-01T10:00:00Z",
            "mouse_path": [[10, 20, 0.5]],
            "scroll_depth": 640,
            "click_delay": 1.25,
            "click_positions": [[100, 200]],
            "total_clicks": 5,
            "ad_clicks": 2,
            "hover_times": {"ad_banner": 3.1},
            "session_duration": 42.0,
            "fingerprint": {"timezone": "Asia/Calcutta"},
            "ad_hover_time": 3.1,
            "ad_visible_time": 7.5,
            "ad_click_coordinates": [{"x": 5, "y": 9}],
            "ad_visibility_changes": [{"time": 1.0, "ratio": 1.0}],
            "ad_dwell_time": 3.5,
            "ad_click_accuracy": 0.9,
            "repeated_ad_clicks": 1,
            "scroll_to_ad_time": 2.2,
        });

        let session = NormalizedSession::from_payload(&payload, fixed_now());

        assert_eq!(session.session_id, "s1");
        assert_eq!(session.label, "human");
        assert_eq!(
            session.occurred_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(session.local_display_time, "01-01-2024 15:30");
        assert_eq!(session.scroll_depth, 640);
        assert_eq!(session.click_delay, Some(1.25));
        assert_eq!(session.total_clicks, 5);
        assert_eq!(session.ad_clicks, 2);
        assert_eq!(session.ad_dwell_time, Some(3.5));
        assert_eq!(session.ad_click_accuracy, Some(0.9));
        assert_eq!(session.repeated_ad_clicks, 1);
        assert_eq!(session.mouse_path, json!([[10, 20, 0.5]]));
        assert_eq!(session.fingerprint, json!({"timezone": "Asia/Calcutta"}));
    }

    #[test]
    fn zero_ad_clicks_drops_engagement_quality_metrics() {
        let payload = json!({
            "session_id": "s2",
            "ad_clicks": 0,
            "ad_dwell_time": 9.9,
            "ad_click_accuracy": 0.5,
        });

        let session = NormalizedSession::from_payload(&payload, fixed_now());

        assert_eq!(session.ad_clicks, 0);
        assert_eq!(session.ad_dwell_time, None);
        assert_eq!(session.ad_click_accuracy, None);
    }

    #[test]
    fn engagement_metrics_survive_when_an_ad_click_happened() {
        let payload = json!({
            "session_id": "s2b",
            "ad_clicks": 1,
            "ad_dwell_time": 9.9,
            "ad_click_accuracy": 0.5,
        });

        let session = NormalizedSession::from_payload(&payload, fixed_now());

        assert_eq!(session.ad_dwell_time, Some(9.9));
        assert_eq!(session.ad_click_accuracy, Some(0.5));
    }

    #[test]
    fn explicit_null_and_absence_stay_distinguishable() {
        // click_delay: null -> stored null; scroll_depth omitted -> stored 0.
        let payload = json!({
            "session_id": "s3",
            "click_delay": null,
        });

        let session = NormalizedSession::from_payload(&payload, fixed_now());

        assert_eq!(session.click_delay, None);
        assert_eq!(session.scroll_depth, 0);
        assert_eq!(session.session_duration, None);
    }

    #[test]
    fn malformed_numeric_defaults_without_aborting_the_record() {
        let payload = json!({
            "session_id": "s3",
            "total_clicks": "abc",
            "scroll_depth": 120,
        });

        let session = NormalizedSession::from_payload(&payload, fixed_now());

        assert_eq!(session.total_clicks, 0);
        assert_eq!(session.scroll_depth, 120);
    }

    #[test]
    fn missing_session_id_gets_a_fresh_uuid() {
        let session = NormalizedSession::from_payload(&json!({"label": "bot"}), fixed_now());
        assert!(Uuid::parse_str(&session.session_id).is_ok());

        let other = NormalizedSession::from_payload(&json!({"label": "bot"}), fixed_now());
        assert_ne!(session.session_id, other.session_id);
    }

    #[test]
    fn completely_unusable_payload_still_normalizes() {
        let session = NormalizedSession::from_payload(&Value::Null, fixed_now());

        assert!(!session.session_id.is_empty());
        assert_eq!(session.label, "unknown");
        assert_eq!(session.occurred_at, fixed_now());
        assert_eq!(session.scroll_depth, 0);
        assert_eq!(session.click_delay, None);
        assert_eq!(session.mouse_path, Value::Null);
        assert_eq!(session.ad_click_coordinates, json!([]));
        assert_eq!(session.ad_visibility_changes, json!([]));
    }
}
