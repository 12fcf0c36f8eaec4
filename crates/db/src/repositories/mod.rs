//! Repository layer.
//!
//! Zero-sized structs providing async operations that accept `&PgPool` as
//! the first argument.

pub mod session_repo;

pub use session_repo::{PutOutcome, SessionRepo};
