//! Board coordinates and the absolute turn counter.

use std::fmt;

/// A cell coordinate on the board, `(row, col)`.
///
/// Components are signed so that off-board candidates (for example the
/// cell above row 0) can be formed and then rejected by a bounds check.
/// Positions handed back to callers are always inside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, `0` at the top.
    pub row: i32,
    /// Column index, `0` at the left.
    pub col: i32,
}

impl Position {
    /// Create a position from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position shifted by `(dr, dc)`. No bounds check.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Orders candidates exactly like [`distance`](Self::distance) but
    /// stays in integer arithmetic.
    pub fn distance_squared(self, other: Position) -> i64 {
        let dr = i64::from(self.row) - i64::from(other.row);
        let dc = i64::from(self.col) - i64::from(other.col);
        dr * dr + dc * dc
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Monotonically increasing turn counter for a whole game session.
///
/// Starts at zero and only resets when the session restarts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Turn(pub u64);

impl Turn {
    /// The turn after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Turn {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_squared() {
        let a = Position::new(2, 2);
        let b = Position::new(0, 1);
        assert_eq!(a.distance_squared(b), 5);
        assert!((a.distance(b) - 5f64.sqrt()).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_can_leave_the_board() {
        let p = Position::new(0, 0).offset(-1, 0);
        assert_eq!(p, Position::new(-1, 0));
    }

    #[test]
    fn turn_next_increments() {
        assert_eq!(Turn(0).next(), Turn(1));
        assert_eq!(Turn::default(), Turn(0));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Turn(7).to_string(), "7");
    }
}
