//! Test utilities and board fixtures for Cellchase development.
//!
//! Fixtures build [`BoardState`](cellchase_core::BoardState) values from compact descriptions so
//! tests can state the board they mean at a glance.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{board_from_ascii, caged, dead_board, p, striped};
