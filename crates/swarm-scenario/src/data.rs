//! In-memory scenario model.

use swarm_core::{BodyShape, Obstacle, RunConfig, Vec3};

use crate::{ScenarioError, ScenarioResult};

// ── KinematicLimits ───────────────────────────────────────────────────────────

/// Admissible region and actuator bounds shared by every agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicLimits {
    /// Lower corner of the admissible position box.
    pub pos_min: Vec3,
    /// Upper corner of the admissible position box.
    pub pos_max: Vec3,
    /// Per-axis speed bound.
    pub vel_max: f64,
    /// Lower bound on the collective thrust magnitude.
    pub f_min: f64,
    /// Upper bound on the collective thrust magnitude.
    pub f_max: f64,
    /// Gravity constant added to the vertical acceleration.
    pub gravity: f64,
}

impl Default for KinematicLimits {
    fn default() -> Self {
        Self {
            pos_min: Vec3::new(-100.0, -100.0, 0.0),
            pos_max: Vec3::new(100.0, 100.0, 100.0),
            vel_max: 2.0,
            f_min:   4.9,
            f_max:   19.6,
            gravity: 9.81,
        }
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Start/goal pairs and obstacle geometry, before validation.
///
/// The obstacle lists are kept separate exactly as they appear in the
/// source so a length mismatch can be reported rather than silently zipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub init:                  Vec<Vec3>,
    pub goal:                  Vec<Vec3>,
    pub obstacle_positions:    Vec<Vec3>,
    pub obstacle_half_extents: Vec<Vec3>,
}

impl Placement {
    /// Number of complete start/goal pairs.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.init.len().min(self.goal.len())
    }
}

// ── ScenarioData ──────────────────────────────────────────────────────────────

/// Everything the core consumes about the world and the swarm.
#[derive(Clone, Debug)]
pub struct ScenarioData {
    /// Drone count asked for by the parameter file.  May exceed the number of
    /// start/goal pairs; the simulation builder clamps it.
    pub requested_agents: usize,

    /// Ellipsoid half-axes shared by all agents.
    pub shape: BodyShape,

    pub limits: KinematicLimits,

    /// Agent body half-length used in the agent–obstacle clearance metric.
    pub body_half_length: f64,

    /// Safety buffer added to the agent–obstacle clearance metric.
    pub safety_buffer: f64,

    /// Per-axis amplitude of the position noise applied by solvers that
    /// simulate sensing error.  Zero disables it.
    pub noise: Vec3,

    pub placement: Placement,
}

impl ScenarioData {
    /// Validate the obstacle lists and build the shared obstacle list.
    ///
    /// The position/half-extent length check runs even in free space so a
    /// malformed file is always reported; `free_space` then drops every
    /// obstacle.
    pub fn obstacles(&self, free_space: bool) -> ScenarioResult<Vec<Obstacle>> {
        let positions = &self.placement.obstacle_positions;
        let extents = &self.placement.obstacle_half_extents;
        if positions.len() != extents.len() {
            return Err(ScenarioError::Config(format!(
                "obstacle positions ({}) and half-extents ({}) differ in length",
                positions.len(),
                extents.len()
            )));
        }
        if free_space {
            return Ok(Vec::new());
        }
        Ok(positions
            .iter()
            .zip(extents)
            .map(|(&center, &half)| Obstacle::new(center, half))
            .collect())
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A complete mission description: run parameters plus scenario data.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub run:  RunConfig,
    pub data: ScenarioData,
}

impl Scenario {
    /// Replace start/goal pairs and obstacles with an externally loaded
    /// placement (see [`load_placement_reader`][crate::load_placement_reader]).
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.data.placement = placement;
        self
    }
}
