//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swarm_agent::AgentStoreBuilder;
//!
//! let obstacles = scenario.data.obstacles(scenario.run.free_space)?;
//! let (store, rngs) = AgentStoreBuilder::new(&scenario.data, obstacles, scenario.run.horizon)
//!     .agent_count(4)
//!     .seed(42)
//!     .build();
//!
//! assert_eq!(store.count(), 4);
//! ```

use std::sync::Arc;

use swarm_core::{AgentId, Obstacle};
use swarm_scenario::ScenarioData;

use crate::{AgentRecord, AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agent `i` takes start/goal pair `i` of the scenario placement.  The agent
/// count defaults to the number of complete pairs and can never exceed it.
pub struct AgentStoreBuilder<'a> {
    data:      &'a ScenarioData,
    obstacles: Arc<[Obstacle]>,
    horizon:   usize,
    count:     usize,
    seed:      u64,
    use_model: bool,
}

impl<'a> AgentStoreBuilder<'a> {
    pub fn new(data: &'a ScenarioData, obstacles: Vec<Obstacle>, horizon: usize) -> Self {
        Self {
            data,
            obstacles: obstacles.into(),
            horizon,
            count: data.placement.pair_count(),
            seed: 0,
            use_model: false,
        }
    }

    /// Number of agents to build; clamped to the available start/goal pairs.
    pub fn agent_count(mut self, count: usize) -> Self {
        self.count = count.min(self.data.placement.pair_count());
        self
    }

    /// Global seed for the per-agent RNGs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Flag every record for the solver's richer dynamics model.
    pub fn use_model(mut self, use_model: bool) -> Self {
        self.use_model = use_model;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// Every record starts at rest at its initial position with a trajectory
    /// that holds that position for the whole horizon.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let placement = &self.data.placement;
        let records = (0..self.count)
            .map(|i| {
                AgentRecord::new(
                    AgentId(i as u32),
                    self.count,
                    placement.init[i],
                    placement.goal[i],
                    Arc::clone(&self.obstacles),
                    self.data.shape,
                    self.data.limits,
                    self.data.body_half_length,
                    self.data.safety_buffer,
                    self.data.noise,
                    self.use_model,
                    self.horizon,
                )
            })
            .collect();

        (AgentStore::new(records), AgentRngs::new(self.count, self.seed))
    }
}
