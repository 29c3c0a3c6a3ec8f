//! Edge-bounded cardinal movement.
//!
//! Movement only checks that the destination exists. Stepping onto a
//! living cell is legal; the caller decides what that costs.

use cellchase_core::{BoardState, Direction, Position};

/// Result of [`attempt_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The step is on the board; the actor now stands here.
    Moved(Position),
    /// The step would leave the board; the actor stays put.
    Blocked,
}

impl MoveOutcome {
    /// The new position, or `None` when blocked.
    pub fn position(self) -> Option<Position> {
        match self {
            MoveOutcome::Moved(p) => Some(p),
            MoveOutcome::Blocked => None,
        }
    }

    /// `true` for [`MoveOutcome::Blocked`].
    pub fn is_blocked(self) -> bool {
        matches!(self, MoveOutcome::Blocked)
    }
}

/// Step one cell from `position` in `direction`.
///
/// Uses the neighbourhood of `position` to decide whether the
/// destination exists. Destination liveness is not consulted.
///
/// # Examples
///
/// ```
/// use cellchase_automaton::{attempt_move, MoveOutcome};
/// use cellchase_core::{BoardState, Direction, Position};
///
/// let board = BoardState::new(3, 3).unwrap();
/// let origin = Position::new(0, 0);
/// assert_eq!(attempt_move(&board, origin, Direction::Up), MoveOutcome::Blocked);
/// assert_eq!(
///     attempt_move(&board, origin, Direction::Right),
///     MoveOutcome::Moved(Position::new(0, 1)),
/// );
/// ```
pub fn attempt_move(state: &BoardState, position: Position, direction: Direction) -> MoveOutcome {
    if state.neighbours(position).toward(direction).is_none() {
        return MoveOutcome::Blocked;
    }
    let (dr, dc) = direction.offset_2d();
    MoveOutcome::Moved(position.offset(dr, dc))
}
