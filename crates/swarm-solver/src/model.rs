//! The `AgentSolver` trait: the local planner each agent runs every tick.

use swarm_agent::AgentRecord;
use swarm_core::AgentRng;

use crate::SolveContext;

/// Pluggable per-agent planner.
///
/// One call advances `record` by one tick.  On return the solver must have:
///
/// - rewritten the planned trajectory (its length is fixed; sample 0 is the
///   agent's new current position),
/// - set `record.state` to the kinematic state it reports for this tick,
/// - set `record.dist_to_goal`,
/// - appended exactly one smoothness term and one arc-length term through
///   [`AgentRecord::record_costs`],
/// - set `record.infeasible` when it could not satisfy its constraints.
///
/// The orchestrator increments `mpc_step` itself after the solve.
///
/// # Thread safety
///
/// `solve` may run for many agents in parallel.  The record and the RNG are
/// exclusive to the call; everything in `ctx` is shared and read-only.
pub trait AgentSolver: Send + Sync + 'static {
    fn solve(&self, record: &mut AgentRecord, ctx: &SolveContext<'_>, rng: &mut AgentRng);
}
