//! Per-turn timing for a game session.
//!
//! [`TurnMetrics`] captures where a turn's wall-clock time went, plus the
//! planner's own search counters.

use cellchase_planner::PlanMetrics;

/// Timing and search metrics collected during a single turn.
///
/// All durations are in microseconds. A blocked move only fills
/// `total_us`; a turn that ends the game before the actor plans leaves
/// `planning_us` and `plan` at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnMetrics {
    /// Wall-clock time for the entire turn, in microseconds.
    pub total_us: u64,
    /// Time spent advancing the board, in microseconds.
    pub generation_us: u64,
    /// Time spent in the pursuit planner, in microseconds.
    pub planning_us: u64,
    /// Counters reported by the planner.
    pub plan: PlanMetrics,
}
