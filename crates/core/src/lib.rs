//! Domain logic for behavioral session telemetry ingestion.
//!
//! This crate has no database or HTTP surface: it turns a loosely-structured
//! client payload into a fully-typed [`session::NormalizedSession`] through
//! total coercion functions that never fail. The db and api crates build on
//! top of it.

pub mod coerce;
pub mod session;
pub mod timestamp;
pub mod types;
