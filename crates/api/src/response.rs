//! Boundary acknowledgement types.
//!
//! The client-facing contract is success or failure, nothing finer: no
//! field-level detail ever crosses the boundary. Use [`Ack`] instead of
//! ad-hoc `serde_json::json!({ "ok": true })` for compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ "ok": true }` acknowledgement body.
///
/// Returned for both a fresh insert and an idempotent skip; the two are
/// distinguished in server logs only.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
