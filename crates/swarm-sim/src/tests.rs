//! Integration tests for swarm-sim.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swarm_agent::{AgentRecord, KinematicState, SwarmSnapshot};
use swarm_core::{AgentId, AgentRng, BodyShape, RunConfig, Tick, Vec3, Verbosity};
use swarm_scenario::{KinematicLimits, Placement, Scenario, ScenarioData};
use swarm_solver::{AgentSolver, HoldSolver, SolveContext};

use crate::{
    NoopObserver, RunReport, ScenarioEcho, SimBuilder, SimError, SimObserver, TerminalCause,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// dt = 1.0 / 4 = 0.25 s.
fn run_config(max_time: f64) -> RunConfig {
    RunConfig {
        horizon:     4,
        t_plan:      1.0,
        max_time,
        dist_stop:   0.1,
        verbosity:   Verbosity::QUIET,
        seed:        42,
        num_threads: Some(1),
        free_space:  false,
        use_model:   false,
    }
}

fn scenario(init: &[Vec3], goal: &[Vec3], max_time: f64) -> Scenario {
    Scenario {
        run:  run_config(max_time),
        data: ScenarioData {
            requested_agents: init.len(),
            shape:            BodyShape::sphere(0.5),
            limits:           KinematicLimits::default(),
            body_half_length: 0.15,
            safety_buffer:    0.05,
            noise:            Vec3::ZERO,
            placement: Placement {
                init:                  init.to_vec(),
                goal:                  goal.to_vec(),
                obstacle_positions:    vec![],
                obstacle_half_extents: vec![],
            },
        },
    }
}

fn with_obstacle(mut s: Scenario, center: Vec3, half: Vec3) -> Scenario {
    s.data.placement.obstacle_positions.push(center);
    s.data.placement.obstacle_half_extents.push(half);
    s
}

fn far() -> Vec3 {
    Vec3::new(50.0, 50.0, 1.0)
}

/// Jumps straight onto the goal.
struct Teleport;

impl AgentSolver for Teleport {
    fn solve(&self, record: &mut AgentRecord, _ctx: &SolveContext<'_>, _rng: &mut AgentRng) {
        let from = record.trajectory().current();
        let goal = record.goal;
        record.trajectory_mut().samples_mut().fill(goal);
        record.state = KinematicState::at_rest(record.goal);
        record.dist_to_goal = 0.0;
        record.record_costs(1.0, from.distance(record.goal));
    }
}

/// Reports a position far outside the admissible box.
struct Escape;

impl AgentSolver for Escape {
    fn solve(&self, record: &mut AgentRecord, _ctx: &SolveContext<'_>, _rng: &mut AgentRng) {
        record.state.position = Vec3::new(1_000.0, 0.0, 1.0);
        record.record_costs(0.0, 0.0);
    }
}

/// Holds position but reports every solve infeasible.
struct GiveUp;

impl AgentSolver for GiveUp {
    fn solve(&self, record: &mut AgentRecord, ctx: &SolveContext<'_>, rng: &mut AgentRng) {
        HoldSolver.solve(record, ctx, rng);
        record.infeasible = true;
    }
}

/// Both leaves the box and gives up.
struct EscapeAndGiveUp;

impl AgentSolver for EscapeAndGiveUp {
    fn solve(&self, record: &mut AgentRecord, ctx: &SolveContext<'_>, rng: &mut AgentRng) {
        Escape.solve(record, ctx, rng);
        record.infeasible = true;
    }
}

/// Holds position and counts invocations.
struct Counting(Arc<AtomicUsize>);

impl AgentSolver for Counting {
    fn solve(&self, record: &mut AgentRecord, ctx: &SolveContext<'_>, rng: &mut AgentRng) {
        self.0.fetch_add(1, Ordering::Relaxed);
        HoldSolver.solve(record, ctx, rng);
    }
}

#[derive(Default)]
struct Recording {
    echoes:      Vec<ScenarioEcho>,
    tick_starts: Vec<Tick>,
    snapshots:   Vec<SwarmSnapshot>,
    reports:     Vec<RunReport>,
}

impl SimObserver for Recording {
    fn on_run_start(&mut self, echo: &ScenarioEcho) {
        self.echoes.push(echo.clone());
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.tick_starts.push(tick);
    }

    fn on_tick_end(&mut self, _tick: Tick, snapshot: &SwarmSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_run_end(&mut self, report: &RunReport) {
        self.reports.push(report.clone());
    }
}

// ── SimBuilder (initialization) ───────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use swarm_core::CoreError;
    use swarm_scenario::ScenarioError;

    #[test]
    fn clamps_agent_count_to_pairs() {
        let mut s = scenario(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)], &[far(), far()], 1.0);
        s.data.requested_agents = 5;
        let sim = SimBuilder::new(s, HoldSolver).build().unwrap();
        assert_eq!(sim.agents.count(), 2);
        assert_eq!(sim.rngs.inner.len(), 2);
        assert_eq!(sim.agents.get(AgentId(0)).other_agents, 1);
    }

    #[test]
    fn agent_count_override() {
        let s = scenario(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)], &[far(), far()], 1.0);
        let sim = SimBuilder::new(s, HoldSolver).agent_count(1).build().unwrap();
        assert_eq!(sim.agents.count(), 1);
    }

    #[test]
    fn obstacle_mismatch_is_config_error() {
        let mut s = scenario(&[Vec3::ZERO], &[far()], 1.0);
        s.data.placement.obstacle_positions.push(Vec3::new(5.0, 5.0, 1.0));
        let result = SimBuilder::new(s, HoldSolver).build();
        assert!(matches!(result, Err(SimError::Scenario(ScenarioError::Config(_)))));
    }

    #[test]
    fn free_space_drops_obstacles() {
        let mut s = with_obstacle(
            scenario(&[Vec3::ZERO], &[far()], 1.0),
            Vec3::new(5.0, 5.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        s.run.free_space = true;
        let sim = SimBuilder::new(s, HoldSolver).build().unwrap();
        assert!(sim.agents.obstacles().is_empty());
    }

    #[test]
    fn no_agents_is_config_error() {
        let s = scenario(&[], &[], 1.0);
        assert!(matches!(SimBuilder::new(s, HoldSolver).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn degenerate_shape_is_config_error() {
        let mut s = scenario(&[Vec3::ZERO], &[far()], 1.0);
        s.data.shape = BodyShape::new(0.5, 0.0, 0.5);
        assert!(matches!(SimBuilder::new(s, HoldSolver).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_run_config_rejected() {
        let mut s = scenario(&[Vec3::ZERO], &[far()], 1.0);
        s.run.horizon = 0;
        let result = SimBuilder::new(s, HoldSolver).build();
        assert!(matches!(
            result,
            Err(SimError::Scenario(ScenarioError::Core(CoreError::Config(_))))
        ));
    }

    #[test]
    fn dt_from_plan_window() {
        let sim = SimBuilder::new(scenario(&[Vec3::ZERO], &[far()], 1.0), HoldSolver)
            .build()
            .unwrap();
        assert_eq!(sim.clock.dt, 0.25);
        assert_eq!(sim.config.max_ticks(), 4);
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod termination_tests {
    use super::*;

    #[test]
    fn collision_at_tick_zero() {
        let init = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.5, 0.0, 1.0)];
        let mut sim = SimBuilder::new(scenario(&init, &[far(), far()], 10.0), HoldSolver)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::AgentCollision);
        assert_eq!(report.ticks_completed, 1);
        assert!(report.metrics.is_none());
        assert!(sim.state.collision_agent);
    }

    #[test]
    fn obstacle_collision_at_tick_zero() {
        let s = with_obstacle(
            scenario(&[Vec3::new(0.0, 0.0, 1.0)], &[far()], 10.0),
            Vec3::new(0.8, 0.0, 1.0),
            Vec3::new(0.4, 0.4, 0.4),
        );
        let mut sim = SimBuilder::new(s, HoldSolver).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::ObstacleCollision);
        assert_eq!(report.ticks_completed, 1);
    }

    #[test]
    fn single_agent_at_goal_succeeds_immediately() {
        let start = Vec3::new(1.0, 1.0, 1.0);
        let goal = Vec3::new(1.05, 1.0, 1.0);
        let mut sim = SimBuilder::new(scenario(&[start], &[goal], 10.0), HoldSolver)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::Success);
        assert_eq!(report.ticks_completed, 1);
        assert_eq!(report.mission_time, 0.25);
        let metrics = report.metrics.unwrap();
        assert_eq!(metrics.total_ticks, 1);
        assert_eq!(metrics.mission_time, 0.25);
        assert!(metrics.min_inter_agent_per_tick.is_empty());
        assert!(metrics.min_agent_obstacle_per_tick.is_empty());
    }

    #[test]
    fn straggler_blocks_success() {
        let init = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(5.0, 0.0, 1.0)];
        let goal = [Vec3::new(0.0, 0.0, 1.0), far()];
        let mut sim = SimBuilder::new(scenario(&init, &goal, 1.0), HoldSolver).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::GoalNotReached);
        assert_eq!(report.ticks_completed, 4);
        assert!(!sim.state.success);
    }

    #[test]
    fn stops_at_tick_budget() {
        let calls = Arc::new(AtomicUsize::new(0));
        let init = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(5.0, 0.0, 1.0)];
        let mut sim = SimBuilder::new(scenario(&init, &[far(), far()], 10.1), Counting(calls.clone()))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::GoalNotReached);
        assert_eq!(report.ticks_completed, 41);
        assert_eq!(calls.load(Ordering::Relaxed), 82);
        assert!(sim.agents.records().iter().all(|r| r.mpc_step == 41));
    }

    #[test]
    fn zero_budget_runs_no_ticks() {
        let mut sim = SimBuilder::new(scenario(&[Vec3::ZERO], &[far()], 0.0), HoldSolver)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::GoalNotReached);
        assert_eq!(report.ticks_completed, 0);
    }

    #[test]
    fn success_outranks_collision() {
        // Overlapping agents that are both already at their goals.
        let init = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.5, 0.0, 1.0)];
        let mut sim = SimBuilder::new(scenario(&init, &init, 10.0), HoldSolver).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::Success);
        assert!(sim.state.collision_agent);
    }

    #[test]
    fn leaving_the_box_fails() {
        let mut sim = SimBuilder::new(scenario(&[Vec3::new(0.0, 0.0, 1.0)], &[far()], 10.0), Escape)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::OutOfBounds);
        assert_eq!(report.ticks_completed, 1);
    }

    #[test]
    fn infeasible_solve_fails() {
        let mut sim = SimBuilder::new(scenario(&[Vec3::new(0.0, 0.0, 1.0)], &[far()], 10.0), GiveUp)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::Infeasible);
        assert_eq!(report.ticks_completed, 1);
    }

    #[test]
    fn out_of_bounds_outranks_infeasible() {
        let mut sim =
            SimBuilder::new(scenario(&[Vec3::new(0.0, 0.0, 1.0)], &[far()], 10.0), EscapeAndGiveUp)
                .build()
                .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::OutOfBounds);
    }

    #[test]
    fn second_run_rejected() {
        let mut sim = SimBuilder::new(scenario(&[Vec3::ZERO], &[far()], 0.5), HoldSolver)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Config(_))));
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::NO_DISTANCE;
    use swarm_solver::StraightLineSolver;

    fn two_lanes() -> Scenario {
        scenario(
            &[Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 3.0, 1.0)],
            &[Vec3::new(2.0, 0.0, 1.0), Vec3::new(2.0, 3.0, 1.0)],
            10.0,
        )
    }

    #[test]
    fn straight_lanes_reach_goals() {
        // 0.8 * 2.0 m/s * 0.25 s = 0.4 m per tick, 2.0 m to go.
        let mut sim = SimBuilder::new(two_lanes(), StraightLineSolver::default()).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::Success);
        assert_eq!(report.ticks_completed, 5);
        assert_eq!(report.mission_time, 1.25);

        let m = report.metrics.unwrap();
        assert_eq!(m.compute_secs_per_tick.len(), 5);
        assert_eq!(m.smoothness_per_agent, vec![0.0, 0.0]);
        for len in &m.path_length_per_agent {
            assert!((len - 2.0).abs() < 1e-9, "path length {len}");
        }
        assert_eq!(m.min_inter_agent_per_tick.len(), 5);
        assert!(m.min_inter_agent_per_tick.iter().all(|d| (d - 3.0).abs() < 1e-9));
        assert!((m.min_inter_agent_distance - 3.0).abs() < 1e-9);
        assert_eq!(m.min_agent_obstacle_distance, NO_DISTANCE);
        assert_eq!(m.avg_agent_obstacle_distance, 0.0);
    }

    #[test]
    fn teleport_records_costs() {
        let mut sim = SimBuilder::new(two_lanes(), Teleport).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.cause, TerminalCause::Success);
        let m = report.metrics.unwrap();
        assert_eq!(m.smoothness_per_agent, vec![1.0, 1.0]);
        assert_eq!(m.path_length_per_agent, vec![2.0, 2.0]);
        assert_eq!(m.avg_path_length, 2.0);
    }

    #[test]
    fn thread_count_does_not_change_results() {
        let run = |threads: Option<usize>| {
            let mut s = two_lanes();
            s.data.noise = Vec3::new(0.01, 0.01, 0.0);
            s.run.num_threads = threads;
            let mut sim = SimBuilder::new(s, StraightLineSolver::default()).build().unwrap();
            let report = sim.run(&mut NoopObserver).unwrap();
            let positions: Vec<Vec3> =
                sim.agents.records().iter().map(|r| r.state.position).collect();
            (report.cause, report.ticks_completed, positions)
        };
        assert_eq!(run(Some(1)), run(Some(4)));
        assert_eq!(run(Some(1)), run(None));
    }

    #[test]
    fn observer_sees_every_tick() {
        let mut obs = Recording::default();
        let mut sim = SimBuilder::new(two_lanes(), StraightLineSolver::default()).build().unwrap();
        let report = sim.run(&mut obs).unwrap();

        assert_eq!(obs.echoes.len(), 1);
        assert_eq!(obs.echoes[0].agent_count, 2);
        assert_eq!(obs.echoes[0].obstacle_count(), 0);
        assert_eq!(obs.echoes[0].dt, 0.25);

        assert_eq!(obs.tick_starts, (0..5).map(Tick).collect::<Vec<_>>());
        assert_eq!(obs.snapshots.len(), 5);
        // Tick 0 broadcasts the initial positions.
        assert_eq!(obs.snapshots[0].position(AgentId(1)), Vec3::new(0.0, 3.0, 1.0));
        // Tick 1 broadcasts the first solve's plan.
        assert!((obs.snapshots[1].position(AgentId(0)).x - 0.4).abs() < 1e-12);

        assert_eq!(obs.reports, vec![report]);
    }
}

// ── State and metrics ─────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;
    use crate::{NO_DISTANCE, RunMetrics, SimulationState};
    use swarm_agent::AgentStoreBuilder;

    #[test]
    fn priority_order() {
        let mut state = SimulationState {
            collision_agent:    true,
            collision_obstacle: true,
            out_space:          true,
            infeasible:         true,
            ..Default::default()
        };
        assert_eq!(state.terminal_cause(), Some(TerminalCause::AgentCollision));
        state.success = true;
        assert_eq!(state.terminal_cause(), Some(TerminalCause::Success));
        state.success = false;
        state.collision_agent = false;
        assert_eq!(state.terminal_cause(), Some(TerminalCause::ObstacleCollision));
        state.collision_obstacle = false;
        assert_eq!(state.terminal_cause(), Some(TerminalCause::OutOfBounds));
        state.out_space = false;
        assert_eq!(state.terminal_cause(), Some(TerminalCause::Infeasible));
        state.infeasible = false;
        assert_eq!(state.terminal_cause(), None);
    }

    #[test]
    fn cause_descriptions() {
        assert_eq!(TerminalCause::AgentCollision.to_string(), "inter-agent collision");
        assert_eq!(TerminalCause::ObstacleCollision.to_string(), "obstacle-agent collision");
        assert_eq!(TerminalCause::OutOfBounds.to_string(), "left admissible region");
        assert_eq!(TerminalCause::GoalNotReached.to_string(), "goal not reached");
    }

    #[test]
    fn aggregate_folds_accumulators() {
        let s = scenario(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)], &[far(), far()], 1.0);
        let (mut store, _rngs) = AgentStoreBuilder::new(&s.data, vec![], 4).build();
        for (smooth, arc) in [(3.0, 1.0), (4.0, 2.0)] {
            store.get_mut(AgentId(0)).record_costs(smooth, arc);
            store.get_mut(AgentId(1)).record_costs(0.0, 0.5);
        }

        let state = SimulationState {
            ticks_completed: 4,
            compute_secs: vec![0.1; 4],
            min_inter_agent: vec![2.0, 1.0],
            ..Default::default()
        };
        let m = RunMetrics::aggregate(&state, &store, 0.25, 2.0);

        assert_eq!(m.total_ticks, 4);
        assert_eq!(m.mission_time, 1.0);
        assert_eq!(m.smoothness_per_agent, vec![5.0, 0.0]);
        assert_eq!(m.path_length_per_agent, vec![3.0, 1.0]);
        assert_eq!(m.avg_smoothness, 2.5);
        assert_eq!(m.avg_path_length, 2.0);
        assert_eq!(m.avg_compute_per_tick, 0.5);
        assert_eq!(m.avg_compute_per_tick_per_agent, 0.25);
        assert_eq!(m.min_inter_agent_distance, 1.0);
        assert_eq!(m.avg_inter_agent_distance, 1.5);
        assert_eq!(m.min_agent_obstacle_distance, NO_DISTANCE);
        assert_eq!(m.avg_agent_obstacle_distance, 0.0);
    }
}
