//! Depth-bounded, greedy-ordered, memoized pursuit search.
//!
//! From the actor's position the search looks one generation ahead,
//! ranks the four cardinal steps by Euclidean distance to the target
//! (ties broken Up, Down, Left, Right), keeps those that land on a cell
//! that will be dead and is not a known breaking point, and descends
//! into them nearest first. A node with no remaining depth is accepted.
//! A node whose candidates all fail is recorded as a breaking point and
//! reported as a dead end to its parent.
//!
//! Work is bounded by the horizon: at most `4^horizon` node
//! evaluations, with no cancellation needed.

use cellchase_automaton::{attempt_move, next_generation_with, MoveOutcome, Rule};
use cellchase_core::{BoardState, Direction, Position, Turn};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::memory::{BreakingPoint, PlannerMemory};
use crate::metrics::PlanMetrics;

/// Lookahead depth used by the game.
pub const DEFAULT_HORIZON: u32 = 5;

/// Outcome of a planning call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// The actor's step for this turn, or `None` to stay in place.
    pub direction: Option<Direction>,
    /// The memory passed in, plus every breaking point found by this call.
    pub memory: PlannerMemory,
    /// Search counters for this call.
    pub metrics: PlanMetrics,
}

/// Chooses the chasing actor's next step.
///
/// Holds only configuration; all session state goes in and out through
/// [`plan()`](PursuitPlanner::plan).
///
/// # Examples
///
/// ```
/// use cellchase_core::{BoardState, Direction, Position, Turn};
/// use cellchase_planner::{PlannerMemory, PursuitPlanner};
///
/// let board = BoardState::new(3, 3).unwrap();
/// let plan = PursuitPlanner::default().plan(
///     Position::new(0, 0),
///     PlannerMemory::new(),
///     &board,
///     Position::new(2, 2),
///     Turn(0),
/// );
/// // Up and Left are equally close; Up wins the tie.
/// assert_eq!(plan.direction, Some(Direction::Up));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PursuitPlanner {
    horizon: u32,
    rule: Rule,
}

impl Default for PursuitPlanner {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            rule: Rule::CHASE,
        }
    }
}

impl PursuitPlanner {
    /// A planner with the given lookahead depth and the game's rule.
    pub fn new(horizon: u32) -> Self {
        Self {
            horizon,
            rule: Rule::CHASE,
        }
    }

    /// Use `rule` to predict board generations.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Lookahead depth.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Rule used to predict generations.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Plan the actor's step for this turn.
    ///
    /// `state` is the board as it stands now; the actor's destination is
    /// checked against the generation after it. `memory` is consumed and
    /// returned in the [`Plan`] with all breaking points found during the
    /// call. A dead end at the root is also recorded, as
    /// `(actor, turn + 1)`.
    pub fn plan(
        &self,
        target: Position,
        memory: PlannerMemory,
        state: &BoardState,
        actor: Position,
        turn: Turn,
    ) -> Plan {
        let span = tracing::debug_span!(
            "plan",
            target = %target,
            actor = %actor,
            turn = turn.0,
            horizon = self.horizon,
        );
        let _enter = span.enter();

        let mut search = Search {
            target,
            rule: self.rule,
            memory,
            metrics: PlanMetrics::default(),
        };
        let direction = match search.evaluate(state, actor, turn, self.horizon) {
            Verdict::Safe(direction) => direction,
            Verdict::DeadEnd => None,
        };

        debug!(
            direction = ?direction,
            evaluations = search.metrics.evaluations,
            memo_hits = search.metrics.memo_hits,
            recorded = search.metrics.breaking_points_recorded,
            "pursuit planned"
        );

        Plan {
            direction,
            memory: search.memory,
            metrics: search.metrics,
        }
    }
}

/// [`PursuitPlanner::plan`] with the default horizon and rule.
pub fn plan_pursuit(
    target: Position,
    memory: PlannerMemory,
    state: &BoardState,
    actor: Position,
    turn: Turn,
) -> Plan {
    PursuitPlanner::default().plan(target, memory, state, actor, turn)
}

// ── Search ──────────────────────────────────────────────────────

enum Verdict {
    /// A continuation survives to the horizon. Carries the first step,
    /// `None` when the node itself had no depth left.
    Safe(Option<Direction>),
    DeadEnd,
}

/// State owned by one planning call. The memory is moved in at the
/// start and moved out at the end; recursion borrows it mutably, one
/// branch at a time.
struct Search {
    target: Position,
    rule: Rule,
    memory: PlannerMemory,
    metrics: PlanMetrics,
}

impl Search {
    fn evaluate(&mut self, state: &BoardState, actor: Position, turn: Turn, remaining: u32) -> Verdict {
        self.metrics.evaluations += 1;
        if remaining == 0 {
            return Verdict::Safe(None);
        }
        self.metrics.expansions += 1;

        let next = next_generation_with(state, self.rule);
        let arrival = turn.next();

        for (direction, cell) in self.candidates(&next, actor, arrival) {
            if let Verdict::Safe(_) = self.evaluate(&next, cell, arrival, remaining - 1) {
                return Verdict::Safe(Some(direction));
            }
        }

        let point = BreakingPoint::new(actor, arrival);
        if self.memory.record(point) {
            self.metrics.breaking_points_recorded += 1;
            trace!(point = %point, "breaking point recorded");
        }
        Verdict::DeadEnd
    }

    /// Cardinal steps from `actor`, nearest to the target first, that
    /// stay on the board, land on a cell dead in `next`, and are not
    /// known breaking points at `arrival`.
    fn candidates(
        &mut self,
        next: &BoardState,
        actor: Position,
        arrival: Turn,
    ) -> SmallVec<[(Direction, Position); 4]> {
        let mut ranked: SmallVec<[(Direction, Position, i64); 4]> = Direction::ALL
            .iter()
            .filter_map(|&d| match attempt_move(next, actor, d) {
                MoveOutcome::Moved(cell) => Some((d, cell, cell.distance_squared(self.target))),
                MoveOutcome::Blocked => None,
            })
            .collect();
        // Stable sort: equal distances keep enumeration order.
        ranked.sort_by_key(|&(_, _, dist)| dist);

        let mut out = SmallVec::new();
        for (d, cell, _) in ranked {
            if next.is_alive(cell) != Some(false) {
                continue;
            }
            if self.memory.contains(cell, arrival) {
                self.metrics.memo_hits += 1;
                continue;
            }
            out.push((d, cell));
        }
        out
    }
}
