//! Cardinal movement directions.

use std::fmt;

/// Cardinal direction for a single step. There is no diagonal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// One cell up (row - 1).
    Up = 0,
    /// One cell down (row + 1).
    Down = 1,
    /// One cell left (col - 1).
    Left = 2,
    /// One cell right (col + 1).
    Right = 3,
}

impl Direction {
    /// All directions in enumeration order.
    ///
    /// This order is the tie-break order of the pursuit planner and must
    /// not change.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub const fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}
