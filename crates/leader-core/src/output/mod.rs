//! Output
//!
//! Serializable views of leader state for logging and inspection.

pub mod snapshot;

pub use snapshot::*;
