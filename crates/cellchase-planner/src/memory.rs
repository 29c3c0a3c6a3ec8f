//! Session-scoped record of known dead ends.

use cellchase_core::{Position, Turn};
use indexmap::IndexSet;
use std::fmt;

/// A `(position, turn)` pair from which an exhaustive search found no
/// viable continuation within the horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BreakingPoint {
    /// Where the actor stood.
    pub position: Position,
    /// The absolute turn the dead end is keyed on.
    pub turn: Turn,
}

impl BreakingPoint {
    /// Create a breaking point.
    pub const fn new(position: Position, turn: Turn) -> Self {
        Self { position, turn }
    }
}

impl fmt::Display for BreakingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.position, self.turn)
    }
}

/// Append-only set of [`BreakingPoint`]s for one game session.
///
/// Entries are never removed; a restart replaces the whole memory with
/// an empty one. Inserting a point that is already present is a no-op.
/// Iteration follows insertion order, so two sessions fed the same
/// turns hold identical memories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerMemory {
    points: IndexSet<BreakingPoint>,
}

impl PlannerMemory {
    /// An empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a breaking point. Returns `true` if it was not known yet.
    pub fn record(&mut self, point: BreakingPoint) -> bool {
        self.points.insert(point)
    }

    /// `true` if `(position, turn)` is a known breaking point.
    pub fn contains(&self, position: Position, turn: Turn) -> bool {
        self.points.contains(&BreakingPoint::new(position, turn))
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recorded points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BreakingPoint> + '_ {
        self.points.iter()
    }
}

impl FromIterator<BreakingPoint> for PlannerMemory {
    fn from_iter<I: IntoIterator<Item = BreakingPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<BreakingPoint> for PlannerMemory {
    fn extend<I: IntoIterator<Item = BreakingPoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(r: i32, c: i32, t: u64) -> BreakingPoint {
        BreakingPoint::new(Position::new(r, c), Turn(t))
    }

    #[test]
    fn duplicate_insert_is_harmless() {
        let mut m = PlannerMemory::new();
        assert!(m.record(bp(1, 1, 3)));
        assert!(!m.record(bp(1, 1, 3)));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn keyed_on_position_and_turn() {
        let m: PlannerMemory = [bp(1, 1, 3)].into_iter().collect();
        assert!(m.contains(Position::new(1, 1), Turn(3)));
        assert!(!m.contains(Position::new(1, 1), Turn(4)));
        assert!(!m.contains(Position::new(1, 2), Turn(3)));
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut m = PlannerMemory::new();
        m.extend([bp(5, 5, 1), bp(0, 0, 9), bp(2, 2, 4)]);
        let order: Vec<_> = m.iter().copied().collect();
        assert_eq!(order, vec![bp(5, 5, 1), bp(0, 0, 9), bp(2, 2, 4)]);
    }

    #[test]
    fn display() {
        assert_eq!(bp(2, 3, 7).to_string(), "(2, 3)@7");
    }
}
