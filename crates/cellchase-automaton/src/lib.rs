//! Board evolution and movement for Cellchase.
//!
//! - [`Rule`]: a life-like birth/survival rule; [`Rule::CHASE`] is the
//!   game's rule (B23/S5678).
//! - [`next_generation`]: pure one-generation transition of a
//!   [`BoardState`](cellchase_core::BoardState).
//! - [`attempt_move`]: edge-bounded cardinal step for an actor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generation;
pub mod navigator;
pub mod rule;

pub use generation::{advance_board, neighbours, next_generation, next_generation_with};
pub use navigator::{attempt_move, MoveOutcome};
pub use rule::{Rule, RuleError};
