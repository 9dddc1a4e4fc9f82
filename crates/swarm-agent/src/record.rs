//! The per-drone `AgentRecord` and its planned-trajectory buffer.

use std::sync::Arc;

use swarm_core::{AgentId, BodyShape, Obstacle, Vec3};
use swarm_scenario::KinematicLimits;

use crate::{AgentError, AgentResult};

// ── KinematicState ────────────────────────────────────────────────────────────

/// Instantaneous state reported by the solver after each solve.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KinematicState {
    pub position:     Vec3,
    pub velocity:     Vec3,
    pub acceleration: Vec3,
}

impl KinematicState {
    /// At rest at `position`.
    pub fn at_rest(position: Vec3) -> Self {
        Self { position, velocity: Vec3::ZERO, acceleration: Vec3::ZERO }
    }
}

// ── Trajectory ────────────────────────────────────────────────────────────────

/// Fixed-length planned trajectory.
///
/// The length is set at construction and can never change: solvers write
/// through [`samples_mut`][Self::samples_mut] (a slice) or replace the whole
/// plan with [`overwrite`][Self::overwrite], which rejects a wrong length.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    samples: Vec<Vec3>,
}

impl Trajectory {
    /// A plan that stays at `position` for the whole horizon.
    ///
    /// `horizon` must be at least 1; `RunConfig::validate` guarantees that
    /// for every trajectory built by the simulator.
    pub fn constant(position: Vec3, horizon: usize) -> Self {
        Self { samples: vec![position; horizon.max(1)] }
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.samples.len()
    }

    /// First sample: the agent's current position.
    #[inline]
    pub fn current(&self) -> Vec3 {
        self.samples[0]
    }

    #[inline]
    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [Vec3] {
        &mut self.samples
    }

    /// Replace the whole plan.  `samples` must have exactly `horizon()` entries.
    pub fn overwrite(&mut self, samples: &[Vec3]) -> AgentResult<()> {
        if samples.len() != self.samples.len() {
            return Err(AgentError::TrajectoryLength {
                expected: self.samples.len(),
                got:      samples.len(),
            });
        }
        self.samples.copy_from_slice(samples);
        Ok(())
    }
}

// ── AgentRecord ───────────────────────────────────────────────────────────────

/// Everything one drone's local planner reads and writes.
///
/// Records are built once by [`AgentStoreBuilder`][crate::AgentStoreBuilder].
/// The orchestrator touches them only between ticks; during the solve phase
/// each record is mutated by its own solver invocation and nothing else.
#[derive(Clone, Debug)]
pub struct AgentRecord {
    /// Badge, unique within the swarm.
    pub id: AgentId,

    /// Number of other agents in the swarm (`num_drone - 1`).
    pub other_agents: usize,

    pub init: Vec3,
    pub goal: Vec3,

    /// Static obstacles, shared by every record and never mutated.
    pub obstacles: Arc<[Obstacle]>,

    /// Ellipsoid half-axes; identical for every agent.
    pub shape: BodyShape,

    pub limits: KinematicLimits,

    /// Body half-length used by the agent–obstacle clearance metric.
    pub body_half_length: f64,

    /// Safety buffer used by the agent–obstacle clearance metric.
    pub safety_buffer: f64,

    /// Per-axis amplitude of simulated sensing noise.
    pub noise: Vec3,

    /// Solver should use its richer dynamics model.
    pub use_model: bool,

    /// State reported by the latest solve.
    pub state: KinematicState,

    /// Ticks completed by this agent (`mpc_step`).
    pub mpc_step: u64,

    /// Distance to goal reported by the latest solve.
    pub dist_to_goal: f64,

    /// `true` when the latest solve could not satisfy its constraints.
    pub infeasible: bool,

    trajectory: Trajectory,
    smoothness: Vec<f64>,
    arc_length: Vec<f64>,
}

impl AgentRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id:               AgentId,
        swarm_size:       usize,
        init:             Vec3,
        goal:             Vec3,
        obstacles:        Arc<[Obstacle]>,
        shape:            BodyShape,
        limits:           KinematicLimits,
        body_half_length: f64,
        safety_buffer:    f64,
        noise:            Vec3,
        use_model:        bool,
        horizon:          usize,
    ) -> Self {
        Self {
            id,
            other_agents: swarm_size.saturating_sub(1),
            init,
            goal,
            obstacles,
            shape,
            limits,
            body_half_length,
            safety_buffer,
            noise,
            use_model,
            state:        KinematicState::at_rest(init),
            mpc_step:     0,
            dist_to_goal: init.distance(goal),
            infeasible:   false,
            trajectory:   Trajectory::constant(init, horizon),
            smoothness:   Vec::new(),
            arc_length:   Vec::new(),
        }
    }

    #[inline]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[inline]
    pub fn trajectory_mut(&mut self) -> &mut Trajectory {
        &mut self.trajectory
    }

    /// Append this tick's smoothness cost and arc-length contribution.
    pub fn record_costs(&mut self, smoothness: f64, arc_length: f64) {
        self.smoothness.push(smoothness);
        self.arc_length.push(arc_length);
    }

    /// Per-tick smoothness cost terms, oldest first.
    #[inline]
    pub fn smoothness_terms(&self) -> &[f64] {
        &self.smoothness
    }

    /// Per-tick arc-length contributions, oldest first.
    #[inline]
    pub fn arc_length_terms(&self) -> &[f64] {
        &self.arc_length
    }
}
