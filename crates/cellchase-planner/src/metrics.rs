//! Per-call search counters for the pursuit planner.

/// Work done by one planning call.
///
/// The engine copies these into its per-turn metrics; tests use them to
/// observe pruning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanMetrics {
    /// Search nodes visited, root included.
    pub evaluations: u64,
    /// Nodes with remaining depth that computed a next generation.
    pub expansions: u64,
    /// Candidates skipped because they matched a known breaking point.
    pub memo_hits: u64,
    /// Breaking points newly added to the memory by this call.
    pub breaking_points_recorded: u64,
}
