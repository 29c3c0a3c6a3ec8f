//! Benchmark profiles and utilities for Cellchase.
//!
//! Provides pre-built boards and [`SessionConfig`] profiles:
//!
//! - [`random_board`]: seeded board of any size and density
//! - [`reference_profile`]: 32x32 session at 20% density
//! - [`stress_profile`]: 128x128 session at 30% density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellchase_core::BoardState;
use cellchase_engine::SessionConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `rows x cols` board with each cell alive with probability `density`.
///
/// # Panics
///
/// Panics on zero dimensions or a density outside `[0, 1]`.
pub fn random_board(rows: u32, cols: u32, density: f64, seed: u64) -> BoardState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    BoardState::from_fn(rows, cols, |_| rng.random_bool(density))
        .expect("benchmark board dimensions must be non-zero")
}

/// Build a reference session profile: 32x32 board, 20% alive.
pub fn reference_profile(seed: u64) -> SessionConfig {
    SessionConfig::random_layout(32, 32, 0.2, seed).expect("reference profile is valid")
}

/// Build a stress session profile: 128x128 board, 30% alive.
///
/// Same horizon as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64) -> SessionConfig {
    SessionConfig::random_layout(128, 128, 0.3, seed).expect("stress profile is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn random_board_deterministic() {
        let a = random_board(20, 30, 0.4, 9);
        let b = random_board(20, 30, 0.4, 9);
        assert_eq!(a, b);
        assert_eq!(a.cell_count(), 600);
    }

    #[test]
    fn random_board_density_extremes() {
        assert!(random_board(5, 5, 0.0, 1).is_extinct());
        assert_eq!(random_board(5, 5, 1.0, 1).living_count(), 25);
    }
}
