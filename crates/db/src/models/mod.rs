//! Persisted entity structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row.

pub mod session;
