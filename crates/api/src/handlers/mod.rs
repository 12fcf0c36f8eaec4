//! Request handlers.

pub mod sessions;
