//! Process-level setup for binaries using this crate.

pub mod tracing;

pub use self::tracing::*;
