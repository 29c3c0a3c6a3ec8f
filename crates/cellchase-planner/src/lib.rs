//! Pursuit planning for the Cellchase chasing actor.
//!
//! The planner runs a depth-bounded, greedy-ordered, memoized search
//! over future board generations and returns the actor's next cardinal
//! step, or `None` when every step leads into a dead end within the
//! horizon.
//!
//! Dead ends are remembered across calls as [`BreakingPoint`]s in a
//! caller-owned [`PlannerMemory`], which is moved into each planning call
//! and handed back, complete, in the resulting [`Plan`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod metrics;
pub mod planner;

pub use memory::{BreakingPoint, PlannerMemory};
pub use metrics::PlanMetrics;
pub use planner::{plan_pursuit, Plan, PursuitPlanner, DEFAULT_HORIZON};
