//! Error types for hundred-doors
//!
//! Every puzzle operation is total; the only fallible surface in this
//! crate is parsing a [`DoorState`](crate::DoorState) from text.

use thiserror::Error;

/// Error returned when a string is not a recognizable door state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid door state {input:?}: expected \"open\" or \"closed\"")]
pub struct ParseDoorStateError {
    /// The rejected input
    pub input: String,
}
