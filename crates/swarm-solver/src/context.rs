//! Read-only tick state passed to every solve.

use swarm_agent::SwarmSnapshot;
use swarm_core::{Tick, Verbosity};

/// What every [`AgentSolver`][crate::AgentSolver] call may read besides its
/// own record.
///
/// Built once per tick by swarm-sim after the snapshot is shared, and handed
/// to all solves of that tick by reference.
pub struct SolveContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Seconds covered by one tick (`t_plan / num`).
    pub dt: f64,

    /// Every agent's broadcast plan for this tick.
    pub snapshot: &'a SwarmSnapshot,

    pub verbosity: Verbosity,
}

impl<'a> SolveContext<'a> {
    #[inline]
    pub fn new(tick: Tick, dt: f64, snapshot: &'a SwarmSnapshot, verbosity: Verbosity) -> Self {
        Self { tick, dt, snapshot, verbosity }
    }
}
