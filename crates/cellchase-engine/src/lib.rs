//! Game session for Cellchase.
//!
//! Provides [`GameSession`], which strings the board automaton, the
//! navigator and the pursuit planner together into playable turns, and
//! [`SessionConfig`], its validated construction input. Everything runs
//! synchronously on the caller's thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod session;

pub use config::{CheeseConfig, ConfigError, SessionConfig, CLASSIC_INITIAL_ALIVE, MAX_HORIZON};
pub use metrics::TurnMetrics;
pub use session::{
    Cheese, GameSession, GameStatus, LossCause, TurnError, TurnEvent, TurnReport,
};
