//! Reusable board fixtures.
//!
//! - [`board_from_ascii`] — parse `#` (alive) / `.` (dead) rows.
//! - [`dead_board`] — all-dead board of a given size.
//! - [`caged`] — a board whose next generation fills all four cardinal
//!   neighbours of a cell.
//! - [`striped`] — alternating living rows, a dense busy board for benches.

use cellchase_core::{BoardState, Position};

/// Shorthand for [`Position::new`].
pub fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Parse an ASCII board. Rows are separated by newlines; surrounding
/// whitespace on each row is ignored. `#` is alive, `.` is dead.
///
/// Panics on any other character or a ragged board.
pub fn board_from_ascii(text: &str) -> BoardState {
    let rows: Vec<Vec<bool>> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    '#' => true,
                    '.' => false,
                    other => panic!("unexpected board character {other:?}"),
                })
                .collect()
        })
        .collect();
    BoardState::from_rows(&rows).expect("fixture board must be rectangular")
}

/// An all-dead `rows x cols` board.
pub fn dead_board(rows: u32, cols: u32) -> BoardState {
    BoardState::new(rows, cols).expect("fixture dimensions must be non-zero")
}

/// A `rows x cols` board with the four diagonal neighbours of `centre`
/// alive and everything else dead.
///
/// Each cardinal neighbour of `centre` then has exactly two living
/// neighbours and is born in the next generation, so an actor at
/// `centre` has no dead cell to step into. Requires `centre` to be at
/// least one cell away from every edge.
pub fn caged(rows: u32, cols: u32, centre: Position) -> BoardState {
    let alive = [
        centre.offset(-1, -1),
        centre.offset(-1, 1),
        centre.offset(1, -1),
        centre.offset(1, 1),
    ];
    BoardState::with_alive(rows, cols, &alive).expect("cage must fit on the board")
}

/// Every other row alive, starting with row 0.
pub fn striped(rows: u32, cols: u32) -> BoardState {
    BoardState::from_fn(rows, cols, |pos| pos.row % 2 == 0)
        .expect("fixture dimensions must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips_through_display() {
        let b = board_from_ascii(
            "#..\n\
             .#.",
        );
        assert_eq!(b.to_string(), "#..\n.#.");
    }

    #[test]
    fn cage_has_four_living_cells() {
        let b = caged(3, 3, p(1, 1));
        assert_eq!(b.living_count(), 4);
        assert_eq!(b.is_alive(p(1, 1)), Some(false));
    }

    #[test]
    #[should_panic(expected = "unexpected board character")]
    fn ascii_rejects_unknown_characters() {
        board_from_ascii("#x");
    }
}
