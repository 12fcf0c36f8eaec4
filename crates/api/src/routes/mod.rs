//! Route definitions.
//!
//! Both routers mount at the root: `/health` for probes and `/log_session`
//! for ingestion (the path telemetry clients already ship with).

pub mod health;
pub mod sessions;
