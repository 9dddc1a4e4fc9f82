//! A solver whose agents never move.

use swarm_agent::{AgentRecord, KinematicState};
use swarm_core::AgentRng;

use crate::{AgentSolver, SolveContext};

/// Keeps every agent hovering at its current position.
///
/// Reports the distance to goal and zero costs.  Useful for smoke runs and
/// for scenarios whose outcome is decided by the initial placement alone.
pub struct HoldSolver;

impl AgentSolver for HoldSolver {
    fn solve(&self, record: &mut AgentRecord, _ctx: &SolveContext<'_>, _rng: &mut AgentRng) {
        let here = record.trajectory().current();
        record.trajectory_mut().samples_mut().fill(here);
        record.state = KinematicState::at_rest(here);
        record.dist_to_goal = here.distance(record.goal);
        record.infeasible = false;
        record.record_costs(0.0, 0.0);
    }
}
