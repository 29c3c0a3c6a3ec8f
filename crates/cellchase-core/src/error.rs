//! Error types for board construction and lookup.

use crate::id::Position;
use std::error::Error;
use std::fmt;

/// Errors arising from building a [`BoardState`](crate::BoardState) or
/// addressing a cell on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to construct a board with zero rows or zero columns.
    EmptyBoard,
    /// A dimension does not fit the signed coordinate type.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
    /// A row of a nested matrix has a different length from the first row.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat cell buffer does not hold `rows * cols` entries.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// A position lies outside the board.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Board rows.
        rows: u32,
        /// Board columns.
        cols: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
            Self::PositionOutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "position {position} out of bounds: [0, {rows}) x [0, {cols})"
            ),
        }
    }
}

impl Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let e = BoardError::PositionOutOfBounds {
            position: Position::new(-1, 3),
            rows: 4,
            cols: 5,
        };
        assert_eq!(
            e.to_string(),
            "position (-1, 3) out of bounds: [0, 4) x [0, 5)"
        );
    }

    #[test]
    fn display_ragged() {
        let e = BoardError::RaggedRow {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(e.to_string(), "row 2 has 1 cells, expected 3");
    }
}
