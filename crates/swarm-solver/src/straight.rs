//! Straight-line reference planner.
//!
//! Each tick the agent moves one `dt` step along the straight line to its
//! goal and plans the rest of the horizon by continuing at the same speed,
//! stopping on the goal.  It is a stand-in for a real trajectory optimizer:
//! it respects the velocity bound and (with `use_model`) an acceleration
//! bound, but it does no avoidance beyond a simple yield rule.
//!
//! # Yield rule
//!
//! If the first step would put the agent inside another agent's collision
//! ellipsoid (checked against the snapshot's current positions), the agent
//! hovers in place this tick instead.  If hovering is in conflict as well,
//! the solve is reported infeasible.

use swarm_agent::{AgentRecord, KinematicState};
use swarm_check::agents_collide;
use swarm_core::{AgentId, AgentRng, Vec3};

use crate::{AgentSolver, SolveContext, SolverError, SolverResult};

pub struct StraightLineSolver {
    speed_fraction: f64,
    max_accel:      f64,
}

impl StraightLineSolver {
    /// `speed_fraction` scales the record's `vel_max` and must lie in
    /// `(0, 1]`.  `max_accel` bounds the commanded acceleration when the
    /// record asks for the rich dynamics model; it must be positive.
    pub fn new(speed_fraction: f64, max_accel: f64) -> SolverResult<Self> {
        if !(speed_fraction > 0.0 && speed_fraction <= 1.0) {
            return Err(SolverError::Config(format!(
                "speed fraction must be in (0, 1], got {speed_fraction}"
            )));
        }
        if !(max_accel > 0.0 && max_accel.is_finite()) {
            return Err(SolverError::Config(format!(
                "max acceleration must be positive, got {max_accel}"
            )));
        }
        Ok(Self { speed_fraction, max_accel })
    }

    /// Velocity that heads for `goal` at the cruise speed without passing it
    /// within one step.
    fn desired_velocity(&self, from: Vec3, goal: Vec3, vel_max: f64, dt: f64) -> Vec3 {
        let to_goal = goal - from;
        let dist = to_goal.norm();
        if dist == 0.0 {
            return Vec3::ZERO;
        }
        let speed = (self.speed_fraction * vel_max).min(dist / dt);
        to_goal * (speed / dist)
    }

    fn limit_accel(&self, accel: Vec3) -> Vec3 {
        let norm = accel.norm();
        if norm > self.max_accel {
            accel * (self.max_accel / norm)
        } else {
            accel
        }
    }
}

impl Default for StraightLineSolver {
    fn default() -> Self {
        Self { speed_fraction: 0.8, max_accel: 5.0 }
    }
}

/// `true` when `p` overlaps any other agent's current snapshot position.
fn conflicts(p: Vec3, record: &AgentRecord, ctx: &SolveContext<'_>) -> bool {
    (0..ctx.snapshot.agent_count() as u32)
        .map(AgentId)
        .filter(|&other| other != record.id)
        .any(|other| agents_collide(p, ctx.snapshot.position(other), record.shape))
}

/// Step from `from` toward `goal` by at most `step`, landing on the goal
/// when it is closer than that.
fn advance(from: Vec3, goal: Vec3, step: f64) -> Vec3 {
    let to_goal = goal - from;
    let dist = to_goal.norm();
    if dist <= step {
        goal
    } else {
        from + to_goal * (step / dist)
    }
}

impl AgentSolver for StraightLineSolver {
    fn solve(&self, record: &mut AgentRecord, ctx: &SolveContext<'_>, rng: &mut AgentRng) {
        let dt = ctx.dt;
        let here = record.trajectory().current();
        let goal = record.goal;
        let velocity = record.state.velocity;

        let target = self.desired_velocity(here, goal, record.limits.vel_max, dt);
        let (mut next_velocity, mut accel) = if record.use_model {
            let accel = self.limit_accel((target - velocity) * (1.0 / dt));
            (velocity + accel * dt, accel)
        } else {
            (target, Vec3::ZERO)
        };
        let mut next = advance(here, goal, next_velocity.norm() * dt);

        record.infeasible = false;
        if conflicts(next, record, ctx) {
            record.infeasible = conflicts(here, record, ctx);
            next = here;
            next_velocity = Vec3::ZERO;
            accel = Vec3::ZERO;
        }

        let noise = record.noise;
        let reported = next
            + Vec3::new(rng.jitter(noise.x), rng.jitter(noise.y), rng.jitter(noise.z));

        let step = next_velocity.norm() * dt;
        let mut sample = reported;
        for slot in record.trajectory_mut().samples_mut() {
            *slot = sample;
            sample = advance(sample, goal, step);
        }

        record.state = KinematicState {
            position:     reported,
            velocity:     next_velocity,
            acceleration: accel,
        };
        record.dist_to_goal = reported.distance(goal);
        record.record_costs(accel.norm(), (next - here).norm());
    }
}
