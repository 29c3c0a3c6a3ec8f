//! One-generation transition of the board.
//!
//! The transition reads only the previous board (Jacobi style): every
//! cell's next state depends on the frozen liveness of its neighbours,
//! never on cells already updated this generation.

use cellchase_core::{BoardState, Neighbourhood, Position};

use crate::rule::Rule;

/// The 8-connected neighbourhood of `(row, col)`.
///
/// Neighbours outside the board are `None`; there is no wraparound.
pub fn neighbours(state: &BoardState, row: i32, col: i32) -> Neighbourhood {
    state.neighbours(Position::new(row, col))
}

/// Apply `rule` to every cell of `state` and return the next board.
pub fn next_generation_with(state: &BoardState, rule: Rule) -> BoardState {
    state.map(|p, alive| rule.next_state(alive, state.neighbours(p).living_count()))
}

/// Advance `state` by one generation under [`Rule::CHASE`].
///
/// Dead cells come alive with 2 or 3 living neighbours; living cells
/// survive only with 5 or more. Pure and deterministic; an all-dead
/// board is a fixed point.
///
/// # Examples
///
/// ```
/// use cellchase_automaton::next_generation;
/// use cellchase_core::{BoardState, Position};
///
/// // Two live ends of a 1x3 strip give birth to the middle and die.
/// let strip = BoardState::with_alive(1, 3, &[Position::new(0, 0), Position::new(0, 2)]).unwrap();
/// let next = next_generation(&strip);
/// assert_eq!(next.to_string(), ".#.");
/// ```
pub fn next_generation(state: &BoardState) -> BoardState {
    next_generation_with(state, Rule::CHASE)
}

/// Alias of [`next_generation`] under the name the game loop uses.
pub fn advance_board(state: &BoardState) -> BoardState {
    next_generation(state)
}
