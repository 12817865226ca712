//! Hallway of doors with the pass-based toggling traversal

use std::fmt;

use indexmap::IndexMap;

use crate::door::DoorState;

/// A hallway of doors visited by the toggling robot.
///
/// Holds door states keyed by index plus a counter of completed passes.
/// Door indices absent from the mapping read as closed and are never
/// touched by a pass; only doors recorded at construction participate
/// in traversal.
///
/// # Example
///
/// ```
/// use hundred_doors::{DoorState, Hallway};
///
/// let mut hallway = Hallway::with_closed_doors(4);
/// assert!(hallway.all_closed());
///
/// hallway.visit();
///
/// assert!(hallway.is_door_open(0));
/// assert!(!hallway.is_door_open(7)); // unknown doors read as closed
/// assert_eq!(hallway.passes(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hallway {
    /// Door states keyed by door index
    doors: IndexMap<usize, DoorState>,

    /// Number of completed passes; also the starting offset of the next one
    passes: usize,
}

impl Hallway {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a hallway with no recorded doors.
    ///
    /// Every query on it reads closed, and passes have nothing to visit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hallway from explicit initial door states.
    ///
    /// Later entries for a repeated index overwrite earlier ones.
    pub fn from_states(states: impl IntoIterator<Item = (usize, DoorState)>) -> Self {
        Self {
            doors: states.into_iter().collect(),
            passes: 0,
        }
    }

    /// Create the classic puzzle setup: doors `0..count`, all closed.
    pub fn with_closed_doors(count: usize) -> Self {
        Self::from_states((0..count).map(|index| (index, DoorState::Closed)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Traversal (Mutation)
    // ═══════════════════════════════════════════════════════════════════

    /// Perform one traversal pass.
    ///
    /// The pass starts at index `passes` and advances by `passes + 1`,
    /// toggling every recorded door it lands on; indices without a
    /// recorded door are skipped, never created. Afterwards the pass
    /// counter increments, so the next call strides one wider.
    ///
    /// Traversal stops strictly before the highest recorded index, so
    /// the door at that index is never toggled by any pass. Callers that
    /// need the highest door to participate must record a sentinel door
    /// above it.
    pub fn visit(&mut self) {
        let max_index = self.doors.keys().copied().max().unwrap_or(0);
        let step = self.passes + 1;

        let mut index = self.passes;
        while index < max_index {
            if let Some(state) = self.doors.get_mut(&index) {
                state.toggle();
            }
            index += step;
        }

        self.passes += 1;
    }

    /// Perform `count` traversal passes back to back.
    ///
    /// `run_passes(100)` on [`Hallway::with_closed_doors`]`(100)` is the
    /// full classic puzzle.
    pub fn run_passes(&mut self, count: usize) {
        for _ in 0..count {
            self.visit();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Check whether the door at `index` is open.
    ///
    /// Indices with no recorded door read as closed; no query fails.
    pub fn is_door_open(&self, index: usize) -> bool {
        self.doors
            .get(&index)
            .is_some_and(|state| state.is_open())
    }

    /// Check whether every recorded door is open.
    ///
    /// Vacuously true for an empty hallway.
    pub fn all_open(&self) -> bool {
        self.doors.values().all(|state| state.is_open())
    }

    /// Check whether every recorded door is closed.
    ///
    /// Vacuously true for an empty hallway.
    pub fn all_closed(&self) -> bool {
        self.doors.values().all(|state| state.is_closed())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Get the number of completed passes.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Get the number of recorded doors.
    pub fn len(&self) -> usize {
        self.doors.len()
    }

    /// Check if the hallway has no recorded doors.
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    /// Iterate over recorded doors in ascending index order.
    pub fn doors(&self) -> impl Iterator<Item = (usize, DoorState)> + '_ {
        let mut entries: Vec<(usize, DoorState)> =
            self.doors.iter().map(|(&index, &state)| (index, state)).collect();
        entries.sort_unstable_by_key(|&(index, _)| index);
        entries.into_iter()
    }

    /// Get the indices of all open doors, in ascending order.
    pub fn open_doors(&self) -> Vec<usize> {
        self.doors()
            .filter(|&(_, state)| state.is_open())
            .map(|(index, _)| index)
            .collect()
    }
}

impl FromIterator<(usize, DoorState)> for Hallway {
    fn from_iter<I: IntoIterator<Item = (usize, DoorState)>>(iter: I) -> Self {
        Self::from_states(iter)
    }
}

impl Extend<(usize, DoorState)> for Hallway {
    fn extend<I: IntoIterator<Item = (usize, DoorState)>>(&mut self, iter: I) {
        self.doors.extend(iter);
    }
}

impl fmt::Display for Hallway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (index, state)) in self.doors().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", index, state)?;
        }
        Ok(())
    }
}
