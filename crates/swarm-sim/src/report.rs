//! What a run hands back to its caller and to observers.

use swarm_core::{BodyShape, Obstacle, Vec3};

use crate::{RunMetrics, TerminalCause};

/// Scenario echo emitted once at run start.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioEcho {
    pub agent_count: usize,
    pub dt:          f64,
    pub shape:       BodyShape,
    pub init:        Vec<Vec3>,
    pub goal:        Vec<Vec3>,
    pub obstacles:   Vec<Obstacle>,
}

impl ScenarioEcho {
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}

/// Outcome of [`Sim::run`][crate::Sim::run].
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub cause:              TerminalCause,
    pub ticks_completed:    u64,
    /// `ticks_completed * dt`.
    pub mission_time:       f64,
    /// Wall time of the whole tick loop.
    pub total_compute_secs: f64,
    /// Present only when `cause` is [`TerminalCause::Success`].
    pub metrics:            Option<RunMetrics>,
}

impl RunReport {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.cause.is_success()
    }
}
