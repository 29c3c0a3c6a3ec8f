//! Cellchase: a turn-based grid chase over an evolving cellular automaton.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cellchase sub-crates. For most users, adding `cellchase` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellchase::prelude::*;
//!
//! // The classic 10x10 board, player at (0,0), actor at (8,8).
//! let mut session = GameSession::new(SessionConfig::default()).unwrap();
//!
//! // Off the top edge: blocked, nothing happens.
//! let report = session.play_turn(Direction::Up).unwrap();
//! assert_eq!(report.player_move, MoveOutcome::Blocked);
//! assert_eq!(session.turn(), Turn(0));
//!
//! // A real step advances the board and lets the actor plan.
//! let report = session.play_turn(Direction::Right).unwrap();
//! assert_eq!(session.player(), Position::new(0, 1));
//! assert!(report.metrics.plan.evaluations >= 1);
//!
//! // The planner can also be driven directly.
//! let board = BoardState::new(3, 3).unwrap();
//! let plan = plan_pursuit(Position::new(0, 0), PlannerMemory::new(), &board, Position::new(2, 2), Turn(0));
//! assert_eq!(plan.direction, Some(Direction::Up));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellchase-core` | Positions, turns, directions, boards, neighbourhoods |
//! | [`automaton`] | `cellchase-automaton` | Rules, generation step, movement |
//! | [`planner`] | `cellchase-planner` | Pursuit planner, breaking-point memory, search metrics |
//! | [`engine`] | `cellchase-engine` | Session config, game session, turn reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`cellchase-core`).
///
/// [`types::BoardState`] is the immutable liveness snapshot;
/// [`types::Position`], [`types::Turn`] and [`types::Direction`] address it.
pub use cellchase_core as types;

/// Board evolution and movement (`cellchase-automaton`).
///
/// [`automaton::next_generation`] applies [`automaton::Rule::CHASE`];
/// [`automaton::attempt_move`] steps an actor without leaving the board.
pub use cellchase_automaton as automaton;

/// Pursuit planning (`cellchase-planner`).
///
/// [`planner::PursuitPlanner`] picks the chasing actor's next step,
/// threading a [`planner::PlannerMemory`] of known dead ends.
pub use cellchase_planner as planner;

/// Game sessions (`cellchase-engine`).
///
/// [`engine::GameSession`] plays turns from a validated
/// [`engine::SessionConfig`].
pub use cellchase_engine as engine;

/// Common imports for typical Cellchase usage.
///
/// ```rust
/// use cellchase::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cellchase_core::{BoardState, Direction, Neighbourhood, Position, Turn};

    // Automaton
    pub use cellchase_automaton::{
        advance_board, attempt_move, next_generation, MoveOutcome, Rule,
    };

    // Planner
    pub use cellchase_planner::{plan_pursuit, Plan, PlanMetrics, PlannerMemory, PursuitPlanner};

    // Errors
    pub use cellchase_automaton::RuleError;
    pub use cellchase_core::BoardError;
    pub use cellchase_engine::{ConfigError, TurnError};

    // Engine
    pub use cellchase_engine::{
        GameSession, GameStatus, LossCause, SessionConfig, TurnEvent, TurnMetrics, TurnReport,
    };
}
