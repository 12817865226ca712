//! # Hundred Doors
//!
//! An in-memory simulation of the classic "100 doors" toggling puzzle.
//!
//! A hallway of doors starts closed. A robot makes repeated passes: the
//! first pass visits every door and toggles it, the second pass visits
//! every second door, the third every third door, and so on. After enough
//! passes an interesting pattern of open doors remains.
//!
//! ## Architecture
//!
//! - **[`DoorState`]**: a door is either open or closed
//! - **[`Hallway`]**: door states keyed by index, plus a pass counter,
//!   with a single mutating [`Hallway::visit`] operation
//!
//! Everything is synchronous and in-memory; there is no I/O and every
//! query is total.
//!
//! ## Example
//!
//! ```
//! use hundred_doors::Hallway;
//!
//! let mut hallway = Hallway::with_closed_doors(10);
//! hallway.visit();
//! assert!(hallway.is_door_open(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod door;
pub mod error;
pub mod hallway;

// Re-export main types
pub use door::DoorState;
pub use error::ParseDoorStateError;
pub use hallway::Hallway;

/// Hundred-doors version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
