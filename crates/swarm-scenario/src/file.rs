//! Serde model of the YAML parameter file.
//!
//! # Format
//!
//! ```yaml
//! verbose: 2
//! num: 20            # horizon samples
//! t_plan: 2.0        # planning window, seconds
//! max_time: 30.0
//! dist_stop: 0.1
//! num_drone: 2
//! free_space: false
//! a_drone: 0.15
//! b_drone: 0.15
//! c_drone: 0.3
//! init_drone: [[0.0, 0.0, 1.0], [2.0, 0.0, 1.0]]
//! goal_drone: [[2.0, 2.0, 1.0], [0.0, 2.0, 1.0]]
//! pos_static_obs: [[1.0, 1.0, 1.0]]
//! dim_static_obs: [[0.2, 0.2, 1.0]]
//! ```
//!
//! Every coordinate list is a list of `[x, y, z]` triples.  Keys missing from
//! the file fall back to the defaults below; a missing `num_drone` means one
//! drone per start/goal pair.

use serde::Deserialize;

use swarm_core::{BodyShape, RunConfig, Vec3, Verbosity};

use crate::{KinematicLimits, Placement, Scenario, ScenarioData};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub verbose:    u8,
    pub num:        usize,
    pub t_plan:     f64,
    pub max_time:   f64,
    pub dist_stop:  f64,
    pub num_drone:  Option<usize>,
    pub free_space: bool,
    pub use_model:  bool,
    pub seed:       u64,
    pub num_threads: Option<usize>,

    pub a_drone: f64,
    pub b_drone: f64,
    pub c_drone: f64,

    pub lx_drone: f64,
    pub buffer:   f64,

    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub vel_max: f64,
    pub f_min:   f64,
    pub f_max:   f64,
    pub gravity: f64,

    pub noise: [f64; 3],

    pub init_drone:     Vec<[f64; 3]>,
    pub goal_drone:     Vec<[f64; 3]>,
    pub pos_static_obs: Vec<[f64; 3]>,
    pub dim_static_obs: Vec<[f64; 3]>,
}

impl Default for ScenarioFile {
    fn default() -> Self {
        let limits = KinematicLimits::default();
        Self {
            verbose:     0,
            num:         20,
            t_plan:      2.0,
            max_time:    60.0,
            dist_stop:   0.1,
            num_drone:   None,
            free_space:  false,
            use_model:   false,
            seed:        0,
            num_threads: None,

            a_drone: 0.15,
            b_drone: 0.15,
            c_drone: 0.3,

            lx_drone: 0.15,
            buffer:   0.0,

            x_min:   limits.pos_min.x,
            x_max:   limits.pos_max.x,
            y_min:   limits.pos_min.y,
            y_max:   limits.pos_max.y,
            z_min:   limits.pos_min.z,
            z_max:   limits.pos_max.z,
            vel_max: limits.vel_max,
            f_min:   limits.f_min,
            f_max:   limits.f_max,
            gravity: limits.gravity,

            noise: [0.0; 3],

            init_drone:     Vec::new(),
            goal_drone:     Vec::new(),
            pos_static_obs: Vec::new(),
            dim_static_obs: Vec::new(),
        }
    }
}

impl ScenarioFile {
    /// Convert the flat parameter file into the typed scenario model.
    ///
    /// No validation happens here beyond the types; the simulation builder
    /// owns the consistency checks so that every scenario source goes
    /// through the same rules.
    pub fn into_scenario(self) -> Scenario {
        let to_points = |v: Vec<[f64; 3]>| v.into_iter().map(Vec3::from).collect::<Vec<_>>();

        let run = RunConfig {
            horizon:     self.num,
            t_plan:      self.t_plan,
            max_time:    self.max_time,
            dist_stop:   self.dist_stop,
            verbosity:   Verbosity(self.verbose),
            seed:        self.seed,
            num_threads: self.num_threads,
            free_space:  self.free_space,
            use_model:   self.use_model,
        };

        let pairs = self.init_drone.len().min(self.goal_drone.len());
        let data = ScenarioData {
            requested_agents: self.num_drone.unwrap_or(pairs),
            shape: BodyShape::new(self.a_drone, self.b_drone, self.c_drone),
            limits: KinematicLimits {
                pos_min: Vec3::new(self.x_min, self.y_min, self.z_min),
                pos_max: Vec3::new(self.x_max, self.y_max, self.z_max),
                vel_max: self.vel_max,
                f_min:   self.f_min,
                f_max:   self.f_max,
                gravity: self.gravity,
            },
            body_half_length: self.lx_drone,
            safety_buffer:    self.buffer,
            noise:            Vec3::from(self.noise),
            placement: Placement {
                init:                  to_points(self.init_drone),
                goal:                  to_points(self.goal_drone),
                obstacle_positions:    to_points(self.pos_static_obs),
                obstacle_half_extents: to_points(self.dim_static_obs),
            },
        };

        Scenario { run, data }
    }
}
