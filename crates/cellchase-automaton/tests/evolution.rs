//! Integration test: multi-generation evolution and movement on
//! evolving boards.

use cellchase_automaton::{advance_board, attempt_move, next_generation, MoveOutcome};
use cellchase_core::{BoardState, Direction};
use cellchase_test_utils::{board_from_ascii, caged, dead_board, p, striped};

#[test]
fn dead_board_stays_dead() {
    let mut b = dead_board(7, 5);
    for _ in 0..100 {
        b = advance_board(&b);
    }
    assert!(b.is_extinct());
}

#[test]
fn diagonal_neighbours_count_for_births() {
    // Movement is 4-directional, but the cage built only from diagonals
    // still fills every cardinal neighbour.
    let b = caged(5, 5, p(2, 2));
    let next = next_generation(&b);
    for d in Direction::ALL {
        let to = attempt_move(&next, p(2, 2), d).position().unwrap();
        assert_eq!(next.is_alive(to), Some(true), "{d}");
    }
    assert_eq!(next.is_alive(p(2, 2)), Some(false));
}

#[test]
fn striped_board_evolves_identically_twice() {
    let mut a = striped(12, 9);
    let mut b = striped(12, 9);
    for _ in 0..20 {
        a = next_generation(&a);
        b = next_generation(&b);
        assert_eq!(a, b);
    }
}

#[test]
fn movement_ignores_liveness_on_any_generation() {
    let mut b = board_from_ascii(
        "####\n\
         ####\n\
         ####",
    );
    for _ in 0..3 {
        assert_eq!(
            attempt_move(&b, p(1, 1), Direction::Right),
            MoveOutcome::Moved(p(1, 2))
        );
        assert!(attempt_move(&b, p(0, 3), Direction::Up).is_blocked());
        b = next_generation(&b);
    }
}

#[test]
fn single_cell_board_is_total() {
    let alive = BoardState::from_rows(&[[true]]).unwrap();
    assert!(next_generation(&alive).is_extinct());
    let dead = BoardState::from_rows(&[[false]]).unwrap();
    assert!(next_generation(&dead).is_extinct());
}
