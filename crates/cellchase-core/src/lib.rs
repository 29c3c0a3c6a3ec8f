//! Core types for the Cellchase grid chase game.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the board snapshot ([`BoardState`]), coordinates ([`Position`]),
//! the absolute turn counter ([`Turn`]), cardinal movement
//! ([`Direction`]) and the 8-slot [`Neighbourhood`] view used by the
//! automaton and the navigator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod direction;
pub mod error;
pub mod id;
pub mod neighbourhood;

pub use board::BoardState;
pub use direction::Direction;
pub use error::BoardError;
pub use id::{Position, Turn};
pub use neighbourhood::{Neighbourhood, Slot, MOORE_OFFSETS};
