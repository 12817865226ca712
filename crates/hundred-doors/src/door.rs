//! Door state representation

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDoorStateError;

/// The state of a single door.
///
/// A door index that was never recorded in a hallway reads as closed,
/// so `Closed` is the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoorState {
    /// The door is open
    Open,

    /// The door is closed
    #[default]
    Closed,
}

impl DoorState {
    /// Flip the state: `Closed` becomes `Open` and `Open` becomes `Closed`.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DoorState::Open => DoorState::Closed,
            DoorState::Closed => DoorState::Open,
        }
    }

    /// Toggle the state in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Check if the door is open.
    pub fn is_open(self) -> bool {
        self == DoorState::Open
    }

    /// Check if the door is closed.
    pub fn is_closed(self) -> bool {
        self == DoorState::Closed
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorState::Open => write!(f, "open"),
            DoorState::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for DoorState {
    type Err = ParseDoorStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(DoorState::Open),
            "closed" => Ok(DoorState::Closed),
            _ => Err(ParseDoorStateError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(DoorState::Closed.toggled(), DoorState::Open);
        assert_eq!(DoorState::Open.toggled(), DoorState::Closed);
    }

    #[test]
    fn test_toggle_in_place() {
        let mut state = DoorState::Closed;
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(state.is_closed());
    }

    #[test]
    fn test_default_is_closed() {
        assert_eq!(DoorState::default(), DoorState::Closed);
    }

    #[test]
    fn test_display() {
        assert_eq!(DoorState::Open.to_string(), "open");
        assert_eq!(DoorState::Closed.to_string(), "closed");
    }

    #[test]
    fn test_from_str_accepts_case_and_whitespace() {
        assert_eq!("open".parse::<DoorState>(), Ok(DoorState::Open));
        assert_eq!(" Closed ".parse::<DoorState>(), Ok(DoorState::Closed));
        assert_eq!("OPEN".parse::<DoorState>(), Ok(DoorState::Open));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        let err = "ajar".parse::<DoorState>().unwrap_err();
        assert_eq!(err.input, "ajar");
    }
}
