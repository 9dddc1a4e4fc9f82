//! Unit tests for swarm-solver.

use swarm_agent::{AgentRngs, AgentStore, AgentStoreBuilder, SwarmSnapshot};
use swarm_core::{AgentId, BodyShape, Tick, Vec3, Verbosity};
use swarm_scenario::{KinematicLimits, Placement, ScenarioData};

use crate::{AgentSolver, SolveContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f64 = 0.25;

fn data(init: &[Vec3], goal: &[Vec3], noise: Vec3) -> ScenarioData {
    ScenarioData {
        requested_agents: init.len(),
        shape:            BodyShape::sphere(0.5),
        limits:           KinematicLimits::default(),
        body_half_length: 0.2,
        safety_buffer:    0.0,
        noise,
        placement: Placement {
            init:                  init.to_vec(),
            goal:                  goal.to_vec(),
            obstacle_positions:    vec![],
            obstacle_half_extents: vec![],
        },
    }
}

fn build(init: &[Vec3], goal: &[Vec3], use_model: bool) -> (AgentStore, AgentRngs) {
    AgentStoreBuilder::new(&data(init, goal, Vec3::ZERO), vec![], 4)
        .use_model(use_model)
        .build()
}

/// Run one tick of `solver` for agent 0 against a tick-0 snapshot.
fn solve_first(solver: &dyn AgentSolver, store: &mut AgentStore, rngs: &mut AgentRngs) {
    let snapshot = SwarmSnapshot::share(Tick::ZERO, store);
    let ctx = SolveContext::new(Tick::ZERO, DT, &snapshot, Verbosity::QUIET);
    let record = store.get_mut(AgentId(0));
    solver.solve(record, &ctx, rngs.get_mut(AgentId(0)));
}

fn close(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-12
}

// ── HoldSolver ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hold {
    use super::*;
    use crate::HoldSolver;

    #[test]
    fn stays_put() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let (mut store, mut rngs) = build(&[start], &[Vec3::new(4.0, 6.0, 3.0)], false);
        solve_first(&HoldSolver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert!(record.trajectory().samples().iter().all(|&p| p == start));
        assert_eq!(record.state.position, start);
        assert_eq!(record.state.velocity, Vec3::ZERO);
        assert_eq!(record.dist_to_goal, 5.0);
        assert!(!record.infeasible);
        assert_eq!(record.smoothness_terms(), &[0.0]);
        assert_eq!(record.arc_length_terms(), &[0.0]);
    }
}

// ── StraightLineSolver ────────────────────────────────────────────────────────

#[cfg(test)]
mod straight {
    use super::*;
    use crate::{SolverError, StraightLineSolver};

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(StraightLineSolver::new(0.0, 1.0), Err(SolverError::Config(_))));
        assert!(matches!(StraightLineSolver::new(1.5, 1.0), Err(SolverError::Config(_))));
        assert!(matches!(StraightLineSolver::new(0.5, 0.0), Err(SolverError::Config(_))));
        assert!(matches!(StraightLineSolver::new(0.5, f64::NAN), Err(SolverError::Config(_))));
        assert!(StraightLineSolver::new(1.0, 3.0).is_ok());
    }

    #[test]
    fn first_order_step_toward_goal() {
        // Cruise speed 0.5 * 2.0 = 1.0 m/s, one step = 0.25 m.
        let solver = StraightLineSolver::new(0.5, 5.0).unwrap();
        let (mut store, mut rngs) =
            build(&[Vec3::new(0.0, 0.0, 1.0)], &[Vec3::new(10.0, 0.0, 1.0)], false);
        solve_first(&solver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert!(close(record.state.position, Vec3::new(0.25, 0.0, 1.0)));
        assert!(close(record.state.velocity, Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(record.state.acceleration, Vec3::ZERO);
        assert!((record.dist_to_goal - 9.75).abs() < 1e-12);
        assert!(!record.infeasible);

        let samples = record.trajectory().samples();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], record.state.position);
        for (k, p) in samples.iter().enumerate() {
            assert!(close(*p, Vec3::new(0.25 * (k + 1) as f64, 0.0, 1.0)), "sample {k}: {p}");
        }
        assert!((record.arc_length_terms()[0] - 0.25).abs() < 1e-12);
        assert_eq!(record.smoothness_terms(), &[0.0]);
    }

    #[test]
    fn never_overshoots_goal() {
        let goal = Vec3::new(0.1, 0.0, 1.0);
        let solver = StraightLineSolver::new(1.0, 5.0).unwrap();
        let (mut store, mut rngs) = build(&[Vec3::new(0.0, 0.0, 1.0)], &[goal], false);
        solve_first(&solver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert!(close(record.state.position, goal));
        assert!(record.dist_to_goal < 1e-12);
        assert!(record.trajectory().samples().iter().all(|&p| close(p, goal)));
    }

    #[test]
    fn rich_model_limits_acceleration() {
        // Target 2.0 m/s from rest needs 8 m/s² over one step; capped at 2.
        let solver = StraightLineSolver::new(1.0, 2.0).unwrap();
        let (mut store, mut rngs) =
            build(&[Vec3::new(0.0, 0.0, 1.0)], &[Vec3::new(10.0, 0.0, 1.0)], true);
        solve_first(&solver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert!(close(record.state.acceleration, Vec3::new(2.0, 0.0, 0.0)));
        assert!(close(record.state.velocity, Vec3::new(0.5, 0.0, 0.0)));
        assert!(close(record.state.position, Vec3::new(0.125, 0.0, 1.0)));
        assert!((record.smoothness_terms()[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn yields_when_step_conflicts() {
        // Agent 1 sits 1.2 m ahead; a 0.25 m step would come within 1.0 m.
        let solver = StraightLineSolver::new(0.5, 5.0).unwrap();
        let start = Vec3::new(0.0, 0.0, 1.0);
        let blocker = Vec3::new(1.2, 0.0, 1.0);
        let (mut store, mut rngs) =
            build(&[start, blocker], &[Vec3::new(10.0, 0.0, 1.0), blocker], false);
        solve_first(&solver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert_eq!(record.state.position, start);
        assert_eq!(record.state.velocity, Vec3::ZERO);
        assert!(!record.infeasible);
        assert_eq!(record.arc_length_terms(), &[0.0]);
    }

    #[test]
    fn infeasible_when_hovering_conflicts_too() {
        let solver = StraightLineSolver::new(0.5, 5.0).unwrap();
        let start = Vec3::new(0.0, 0.0, 1.0);
        let blocker = Vec3::new(0.9, 0.0, 1.0);
        let (mut store, mut rngs) =
            build(&[start, blocker], &[Vec3::new(10.0, 0.0, 1.0), blocker], false);
        solve_first(&solver, &mut store, &mut rngs);

        let record = store.get(AgentId(0));
        assert!(record.infeasible);
        assert_eq!(record.state.position, start);
    }

    #[test]
    fn noise_is_bounded_and_seeded() {
        let noise = Vec3::new(0.05, 0.05, 0.0);
        let init = [Vec3::new(0.0, 0.0, 1.0)];
        let goal = [Vec3::new(10.0, 0.0, 1.0)];
        let solver = StraightLineSolver::new(0.5, 5.0).unwrap();

        let run = |seed: u64| {
            let d = data(&init, &goal, noise);
            let (mut store, mut rngs) = AgentStoreBuilder::new(&d, vec![], 4).seed(seed).build();
            solve_first(&solver, &mut store, &mut rngs);
            store.get(AgentId(0)).state.position
        };

        let a = run(7);
        assert_eq!(a, run(7));
        assert!((a.x - 0.25).abs() <= 0.05);
        assert!(a.y.abs() <= 0.05);
        assert_eq!(a.z, 1.0);
    }

    #[test]
    fn one_cost_term_per_solve() {
        let solver = StraightLineSolver::default();
        let (mut store, mut rngs) =
            build(&[Vec3::new(0.0, 0.0, 1.0)], &[Vec3::new(3.0, 0.0, 1.0)], true);
        for _ in 0..3 {
            solve_first(&solver, &mut store, &mut rngs);
        }
        let record = store.get(AgentId(0));
        assert_eq!(record.smoothness_terms().len(), 3);
        assert_eq!(record.arc_length_terms().len(), 3);
    }
}
