//! Immutable grid liveness snapshot.

use crate::error::BoardError;
use crate::id::Position;
use crate::neighbourhood::{Neighbourhood, MOORE_OFFSETS};
use std::fmt;

/// A rectangular `rows x cols` grid of alive/dead cells.
///
/// Cells are stored row-major: cell `(r, c)` lives at index
/// `r * cols + c`. A `BoardState` is never mutated after construction;
/// each generation produces a fresh value.
///
/// # Examples
///
/// ```
/// use cellchase_core::{BoardState, Position};
///
/// let board = BoardState::with_alive(3, 3, &[Position::new(1, 1)]).unwrap();
/// assert_eq!(board.living_count(), 1);
/// assert_eq!(board.is_alive(Position::new(1, 1)), Some(true));
/// assert_eq!(board.is_alive(Position::new(3, 0)), None);
///
/// // The centre's neighbourhood is fully on the board.
/// assert_eq!(board.neighbours(Position::new(1, 1)).present_count(), 8);
/// // A corner only has 3 neighbours.
/// assert_eq!(board.neighbours(Position::new(0, 0)).present_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    rows: u32,
    cols: u32,
    cells: Vec<bool>,
}

impl BoardState {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    fn check_dims(rows: u32, cols: u32) -> Result<(), BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if rows > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// An all-dead board.
    pub fn new(rows: u32, cols: u32) -> Result<Self, BoardError> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        })
    }

    /// Build from a row-major cell buffer of exactly `rows * cols` entries.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<bool>) -> Result<Self, BoardError> {
        Self::check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from a nested matrix. Every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, BoardError> {
        let first = matrix.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(matrix.len() * first);
        for (i, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != first {
                return Err(BoardError::RaggedRow {
                    row: i,
                    expected: first,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let rows = u32::try_from(matrix.len()).map_err(|_| BoardError::DimensionTooLarge {
            name: "rows",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        let cols = u32::try_from(first).map_err(|_| BoardError::DimensionTooLarge {
            name: "cols",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        Self::from_cells(rows, cols, cells)
    }

    /// An all-dead board with the listed cells alive.
    pub fn with_alive(rows: u32, cols: u32, alive: &[Position]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows, cols)?;
        for &p in alive {
            let idx = board.index_of(p).ok_or(BoardError::PositionOutOfBounds {
                position: p,
                rows,
                cols,
            })?;
            board.cells[idx] = true;
        }
        Ok(board)
    }

    /// Build by evaluating `f` at every position in row-major order.
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut f: impl FnMut(Position) -> bool,
    ) -> Result<Self, BoardError> {
        Self::check_dims(rows, cols)?;
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                cells.push(f(Position::new(r, c)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// A board of the same dimensions with every cell replaced by
    /// `f(position, alive)`.
    pub fn map(&self, mut f: impl FnMut(Position, bool) -> bool) -> BoardState {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| f(self.position_of(i), alive))
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// `true` if `p` lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as u32) < self.rows && (p.col as u32) < self.cols
    }

    /// Flat index of `p`, or `None` when off the board.
    pub fn index_of(&self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.cols as usize + p.col as usize)
        } else {
            None
        }
    }

    /// Position of flat index `idx`. No bounds check.
    pub fn position_of(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Liveness at `p`, `None` when off the board.
    pub fn is_alive(&self, p: Position) -> Option<bool> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Number of living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&a| a).count()
    }

    /// `true` when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&a| a)
    }

    /// Living positions in row-major order.
    pub fn living_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| self.position_of(i))
    }

    /// The 8-connected neighbourhood of `p`. Slots off the board are `None`.
    pub fn neighbours(&self, p: Position) -> Neighbourhood {
        let mut slots = [None; 8];
        for (slot, (dr, dc)) in slots.iter_mut().zip(MOORE_OFFSETS) {
            *slot = self.is_alive(p.offset(dr, dc));
        }
        Neighbourhood::from_slots(slots)
    }

    /// Copy out as a nested row-major matrix.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols as usize)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

/// Renders `#` for alive and `.` for dead, one line per row.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
