//! Fluent builder for constructing a [`Sim`]: the run's initialization step.

use swarm_agent::AgentStoreBuilder;
use swarm_scenario::{Scenario, ScenarioError};
use swarm_solver::AgentSolver;
use tracing::{debug, warn};

use crate::{Sim, SimError, SimResult, SimulationState};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`Scenario`]: run parameters plus scenario data
/// - `S: AgentSolver`: the per-agent planner
///
/// # What `build` does
///
/// 1. Validates the run parameters and the body half-axes.
/// 2. Checks that obstacle positions and half-extents pair up
///    (`free_space` then drops every obstacle).
/// 3. Clamps the drone count to the available start/goal pairs, logging a
///    warning when it has to.
/// 4. Builds one record and one RNG per agent.
/// 5. With the `parallel` feature and `num_threads = Some(n)`, builds a
///    dedicated `n`-thread Rayon pool for the solve phase.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(scenario, HoldSolver)
///     .agent_count(2)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: AgentSolver> {
    scenario:    Scenario,
    solver:      S,
    agent_count: Option<usize>,
}

impl<S: AgentSolver> SimBuilder<S> {
    pub fn new(scenario: Scenario, solver: S) -> Self {
        Self { scenario, solver, agent_count: None }
    }

    /// Override the scenario's requested drone count.  Still clamped to the
    /// available start/goal pairs.
    pub fn agent_count(mut self, count: usize) -> Self {
        self.agent_count = Some(count);
        self
    }

    /// Validate inputs, build the agent arena and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        let Scenario { run: config, data } = self.scenario;
        config.validate().map_err(ScenarioError::from)?;
        if !data.shape.is_valid() {
            return Err(SimError::Config(format!(
                "body half-axes must be positive, got ({}, {}, {})",
                data.shape.a, data.shape.b, data.shape.c
            )));
        }

        let obstacles = data.obstacles(config.free_space)?;

        let requested = self.agent_count.unwrap_or(data.requested_agents);
        let available = data.placement.pair_count();
        if requested > available {
            warn!(
                requested,
                available,
                "fewer start/goal pairs than drones; clamping drone count"
            );
        }
        let count = requested.min(available);
        if count == 0 {
            return Err(SimError::Config("scenario has no agents to simulate".into()));
        }

        let (agents, rngs) = AgentStoreBuilder::new(&data, obstacles, config.horizon)
            .agent_count(count)
            .seed(config.seed)
            .use_model(config.use_model)
            .build();

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        debug!(
            agents = agents.count(),
            obstacles = agents.obstacles().len(),
            dt = config.dt(),
            max_ticks = config.max_ticks(),
            "simulation initialized"
        );

        Ok(Sim {
            clock: config.make_clock(),
            config,
            shape: data.shape,
            agents,
            rngs,
            solver: self.solver,
            state: SimulationState::default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
