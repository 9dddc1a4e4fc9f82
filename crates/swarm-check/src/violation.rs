//! Kinematic bound checks.
//!
//! Solver output carries numerical noise, so values are snapped to a fixed
//! grid before comparison instead of being compared raw:
//!
//! | Quantity          | Grid  | Violation when                                        |
//! |-------------------|-------|-------------------------------------------------------|
//! | position (x,y,z)  | 0.01  | `floor(p/0.01)*0.01 > max` or `ceil(p/0.01)*0.01 < min` |
//! | velocity (x,y,z)  | 0.01  | `floor(|v|/0.01)*0.01 > vel_max + 0.01`               |
//! | thrust magnitude  | 0.1   | `floor(f/0.1)*0.1 > f_max + 0.01` or `ceil(f/0.1)*0.1 < f_min - 0.01` |
//!
//! The position test snaps toward the box, so a value just past a bound by
//! less than one grid step is accepted.

use std::fmt;

use swarm_agent::{AgentStore, Axis, KinematicState};
use swarm_core::{AgentId, Vec3};
use swarm_scenario::KinematicLimits;
use tracing::warn;

const POSITION_GRID: f64 = 0.01;
const VELOCITY_GRID: f64 = 0.01;
const VELOCITY_TOLERANCE: f64 = 0.01;
const THRUST_GRID: f64 = 0.1;
const THRUST_TOLERANCE: f64 = 0.01;

#[inline]
fn snap_down(value: f64, grid: f64) -> f64 {
    (value / grid).floor() * grid
}

#[inline]
fn snap_up(value: f64, grid: f64) -> f64 {
    (value / grid).ceil() * grid
}

/// Collective thrust magnitude `sqrt(ax² + ay² + (gravity + az)²)`.
#[inline]
pub fn thrust_magnitude(acceleration: Vec3, gravity: f64) -> f64 {
    (acceleration.x.powi(2) + acceleration.y.powi(2) + (gravity + acceleration.z).powi(2)).sqrt()
}

/// One bound that an agent's reported state fails.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Violation {
    Position { axis: Axis, value: f64, min: f64, max: f64 },
    Velocity { axis: Axis, speed: f64, max: f64 },
    Thrust { value: f64, min: f64, max: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::Position { axis, value, min, max } => {
                write!(f, "positional bounds not satisfied in {axis}: {value} outside [{min}, {max}]")
            }
            Violation::Velocity { axis, speed, max } => {
                write!(f, "velocity bounds not satisfied in {axis}: |v| = {speed} > {max}")
            }
            Violation::Thrust { value, min, max } => {
                write!(f, "acceleration bounds not satisfied: {value} outside [{min}, {max}]")
            }
        }
    }
}

/// Check one kinematic state against `limits`.
///
/// Every axis is evaluated; the result lists all failures in the order
/// position x/y/z, velocity x/y/z, thrust.
pub fn check_state(state: &KinematicState, limits: &KinematicLimits) -> Vec<Violation> {
    let mut out = Vec::new();

    let axes = [
        (Axis::X, state.position.x, limits.pos_min.x, limits.pos_max.x, state.velocity.x),
        (Axis::Y, state.position.y, limits.pos_min.y, limits.pos_max.y, state.velocity.y),
        (Axis::Z, state.position.z, limits.pos_min.z, limits.pos_max.z, state.velocity.z),
    ];

    for &(axis, value, min, max, _) in &axes {
        if snap_down(value, POSITION_GRID) > max || snap_up(value, POSITION_GRID) < min {
            out.push(Violation::Position { axis, value, min, max });
        }
    }

    for &(axis, _, _, _, velocity) in &axes {
        let speed = velocity.abs();
        if snap_down(speed, VELOCITY_GRID) > limits.vel_max + VELOCITY_TOLERANCE {
            out.push(Violation::Velocity { axis, speed, max: limits.vel_max });
        }
    }

    let thrust = thrust_magnitude(state.acceleration, limits.gravity);
    if snap_down(thrust, THRUST_GRID) > limits.f_max + THRUST_TOLERANCE
        || snap_up(thrust, THRUST_GRID) < limits.f_min - THRUST_TOLERANCE
    {
        out.push(Violation::Thrust { value: thrust, min: limits.f_min, max: limits.f_max });
    }

    out
}

/// Every bound violation found in one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViolationReport {
    pub violations: Vec<(AgentId, Violation)>,
}

impl ViolationReport {
    /// `true` when any agent left the admissible region this tick.
    #[inline]
    pub fn out_of_bounds(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Check every agent's reported state.  Each violation is logged.
pub fn check_violations(store: &AgentStore) -> ViolationReport {
    let mut report = ViolationReport::default();
    for record in store.records() {
        for violation in check_state(&record.state, &record.limits) {
            warn!(agent = %record.id, "{violation}");
            report.violations.push((record.id, violation));
        }
    }
    report
}
