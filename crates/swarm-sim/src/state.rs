//! Run-level flags and accumulators owned by the orchestrator.

use std::fmt;

/// Why a run stopped.  Exactly one cause is attributed per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TerminalCause {
    /// Every agent was inside the stop distance in the same tick.
    Success,
    AgentCollision,
    ObstacleCollision,
    /// Some agent's reported state left the admissible region.
    OutOfBounds,
    /// Some solver could not satisfy its constraints.
    Infeasible,
    /// `max_ticks` ran out.
    GoalNotReached,
}

impl TerminalCause {
    #[inline]
    pub fn is_success(self) -> bool {
        self == TerminalCause::Success
    }

    /// Short human-readable reason, as printed in the final banner.
    pub fn describe(self) -> &'static str {
        match self {
            TerminalCause::Success           => "all agents reached their goals",
            TerminalCause::AgentCollision    => "inter-agent collision",
            TerminalCause::ObstacleCollision => "obstacle-agent collision",
            TerminalCause::OutOfBounds       => "left admissible region",
            TerminalCause::Infeasible        => "infeasible",
            TerminalCause::GoalNotReached    => "goal not reached",
        }
    }
}

impl fmt::Display for TerminalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Mutable run state.
///
/// Collision flags are sticky: once set they stay set.  `out_space`,
/// `success` and `infeasible` describe the latest tick only.
#[derive(Clone, Debug, Default)]
pub struct SimulationState {
    pub collision_agent:    bool,
    pub collision_obstacle: bool,
    pub out_space:          bool,
    pub success:            bool,
    pub infeasible:         bool,

    /// Ticks fully processed so far.
    pub ticks_completed: u64,

    /// Per tick: solve-batch wall time divided by the agent count.
    pub compute_secs: Vec<f64>,

    /// Per tick: minimum centre distance over agent pairs (only ticks with
    /// at least two agents).
    pub min_inter_agent: Vec<f64>,

    /// Per tick: minimum agent–obstacle clearance (only ticks with
    /// obstacles).
    pub min_agent_obstacle: Vec<f64>,
}

impl SimulationState {
    /// The cause that ends the run after the latest tick, if any.
    ///
    /// Priority: success, then agent collision, obstacle collision, out of
    /// bounds, infeasible.  Exhaustion is decided by the tick loop.
    pub fn terminal_cause(&self) -> Option<TerminalCause> {
        if self.success {
            Some(TerminalCause::Success)
        } else if self.collision_agent {
            Some(TerminalCause::AgentCollision)
        } else if self.collision_obstacle {
            Some(TerminalCause::ObstacleCollision)
        } else if self.out_space {
            Some(TerminalCause::OutOfBounds)
        } else if self.infeasible {
            Some(TerminalCause::Infeasible)
        } else {
            None
        }
    }
}
