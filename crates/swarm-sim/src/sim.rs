//! The `Sim` struct and its tick loop.

use std::time::Instant;

use swarm_agent::{AgentRngs, AgentStore, SwarmSnapshot};
use swarm_check::{check_collisions, check_violations, measure_separation};
use swarm_core::{BodyShape, RunConfig, Tick, TickClock};
use swarm_solver::{AgentSolver, SolveContext};
use tracing::{info, warn};

use crate::{
    RunMetrics, RunReport, ScenarioEcho, SimError, SimObserver, SimResult, SimulationState,
    TerminalCause,
};

/// The main simulation runner.
///
/// `Sim<S>` owns every agent record, the per-agent RNGs, the solver and the
/// run state.  Each tick it broadcasts a fresh [`SwarmSnapshot`], runs one
/// solve per agent, then checks the swarm and decides whether to stop.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: AgentSolver> {
    pub config: RunConfig,

    /// Tick counter; `clock.dt` is `t_plan / num`.
    pub clock: TickClock,

    /// Ellipsoid half-axes shared by the swarm.
    pub shape: BodyShape,

    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub solver: S,

    pub state: SimulationState,

    /// Dedicated solve pool when `num_threads` is set; otherwise Rayon's
    /// global pool is used.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<S: AgentSolver> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until a terminal cause is reached or `max_ticks` run out.
    ///
    /// Calls observer hooks at every tick boundary and logs the final banner.
    /// A `Sim` runs once; a second call is a configuration error.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        if self.state.ticks_completed > 0 {
            return Err(SimError::Config("simulation has already run".into()));
        }

        let max_ticks = self.config.max_ticks();
        observer.on_run_start(&self.echo());

        let started = Instant::now();
        let mut cause = TerminalCause::GoalNotReached;
        while self.clock.current_tick.0 < max_ticks {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let snapshot = self.process_tick(now);
            observer.on_tick_end(now, &snapshot);
            self.clock.advance();

            if let Some(c) = self.state.terminal_cause() {
                cause = c;
                break;
            }
        }
        let total_compute_secs = started.elapsed().as_secs_f64();

        let metrics = cause.is_success().then(|| {
            RunMetrics::aggregate(&self.state, &self.agents, self.clock.dt, total_compute_secs)
        });
        let report = RunReport {
            cause,
            ticks_completed: self.state.ticks_completed,
            mission_time: self.clock.secs_for_ticks(self.state.ticks_completed),
            total_compute_secs,
            metrics,
        };

        log_banner(&report);
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Scenario echo as persisted at run start.
    pub fn echo(&self) -> ScenarioEcho {
        ScenarioEcho {
            agent_count: self.agents.count(),
            dt:          self.clock.dt,
            shape:       self.shape,
            init:        self.agents.records().iter().map(|r| r.init).collect(),
            goal:        self.agents.records().iter().map(|r| r.goal).collect(),
            obstacles:   self.agents.obstacles().to_vec(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SwarmSnapshot {
        let verbosity = self.config.verbosity;
        self.state.out_space = false;

        // ── Phase 1: share information ────────────────────────────────────
        let snapshot = SwarmSnapshot::share(now, &self.agents);

        // ── Phase 2: solve (barrier on return) ────────────────────────────
        let t0 = Instant::now();
        self.solve_all(now, &snapshot);
        let batch_secs = t0.elapsed().as_secs_f64();
        self.state.compute_secs.push(batch_secs / self.agents.count() as f64);
        if verbosity.timing() {
            info!(%now, batch_secs, frequency_hz = 1.0 / batch_secs, "solve batch");
        }

        // ── Phase 3: collisions on the broadcast positions ────────────────
        let collisions =
            check_collisions(&snapshot, self.agents.obstacles(), self.shape, now, verbosity);
        self.state.collision_agent |= collisions.agent_collision();
        self.state.collision_obstacle |= collisions.obstacle_collision();

        // ── Phase 4: kinematic bounds on the reported states ──────────────
        if check_violations(&self.agents).out_of_bounds() {
            self.state.out_space = true;
        }

        // ── Phase 5: goal and feasibility ─────────────────────────────────
        let dist_stop = self.config.dist_stop;
        let mut at_goal = true;
        let mut infeasible = false;
        for record in self.agents.records_mut() {
            record.mpc_step += 1;
            at_goal &= record.dist_to_goal < dist_stop;
            if record.infeasible {
                warn!(agent = %record.id, %now, "solver reported infeasible");
                infeasible = true;
            }
        }
        self.state.success = at_goal;
        self.state.infeasible = infeasible;
        if verbosity.progress() {
            let dist: Vec<f64> = self.agents.records().iter().map(|r| r.dist_to_goal).collect();
            info!(%now, dist_to_goal = ?dist, "tick complete");
        }

        // ── Phase 6: separation metrics ───────────────────────────────────
        let separation = measure_separation(&self.agents);
        if let Some(d) = separation.inter_agent {
            self.state.min_inter_agent.push(d);
        }
        if let Some(d) = separation.agent_obstacle {
            self.state.min_agent_obstacle.push(d);
        }

        self.state.ticks_completed += 1;
        snapshot
    }

    /// One solve per agent.  With the `parallel` feature the solves run on
    /// Rayon; each task owns exactly one record and one RNG.
    fn solve_all(&mut self, now: Tick, snapshot: &SwarmSnapshot) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = SolveContext::new(now, self.clock.dt, snapshot, self.config.verbosity);
        let solver = &self.solver;
        let records = self.agents.records_mut();
        let rngs = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        {
            for (record, rng) in records.iter_mut().zip(rngs.iter_mut()) {
                solver.solve(record, &ctx, rng);
            }
        }

        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.install(|| solve_parallel(solver, &ctx, records, rngs)),
                None => solve_parallel(solver, &ctx, records, rngs),
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn solve_parallel<S: AgentSolver>(
    solver:  &S,
    ctx:     &SolveContext<'_>,
    records: &mut [swarm_agent::AgentRecord],
    rngs:    &mut [swarm_core::AgentRng],
) {
    use rayon::prelude::*;

    records
        .par_iter_mut()
        .zip(rngs.par_iter_mut())
        .for_each(|(record, rng)| solver.solve(record, ctx, rng));
}

fn log_banner(report: &RunReport) {
    match &report.metrics {
        Some(m) => {
            info!(
                ticks = report.ticks_completed,
                mission_time = m.mission_time,
                total_compute_secs = m.total_compute_secs,
                avg_compute_per_tick = m.avg_compute_per_tick,
                avg_compute_per_tick_per_agent = m.avg_compute_per_tick_per_agent,
                avg_smoothness = m.avg_smoothness,
                avg_path_length = m.avg_path_length,
                min_inter_agent_distance = m.min_inter_agent_distance,
                avg_inter_agent_distance = m.avg_inter_agent_distance,
                min_agent_obstacle_distance = m.min_agent_obstacle_distance,
                avg_agent_obstacle_distance = m.avg_agent_obstacle_distance,
                "SUCCESS: all drones reached their goals"
            );
        }
        None => {
            warn!(
                ticks = report.ticks_completed,
                mission_time = report.mission_time,
                "FAILURE: {}",
                report.cause
            );
        }
    }
}
