//! Ellipsoid overlap tests.
//!
//! Two bodies with half-axes `(a, b, c)` touch when their centres lie inside
//! an ellipsoid with half-axes `(2a, 2b, 2c)`.  A box with half-extents
//! `(ox, oy, oz)` is handled by inflating it with the body's half-axes
//! (Minkowski sum) and testing the centre against the inflated ellipsoid.
//! In both cases the normalised squared separation `s` is compared with 1:
//! `s < 1` is a collision, `s == 1` is contact without overlap.

use swarm_agent::SwarmSnapshot;
use swarm_core::{AgentId, BodyShape, Obstacle, ObstacleId, Tick, Vec3, Verbosity};
use tracing::warn;

/// Normalised squared separation between two agent centres.
///
/// Symmetric in `p` and `q`.
#[inline]
pub fn agent_separation(p: Vec3, q: Vec3, shape: BodyShape) -> f64 {
    let d = p - q;
    (d.x / (2.0 * shape.a)).powi(2) + (d.y / (2.0 * shape.b)).powi(2) + (d.z / (2.0 * shape.c)).powi(2)
}

/// Normalised squared separation between an agent centre and an obstacle.
#[inline]
pub fn obstacle_separation(p: Vec3, obstacle: &Obstacle, shape: BodyShape) -> f64 {
    let d = p - obstacle.center;
    let h = obstacle.half_extents;
    d.x.powi(2) / (h.x + shape.a).powi(2)
        + d.y.powi(2) / (h.y + shape.b).powi(2)
        + d.z.powi(2) / (h.z + shape.c).powi(2)
}

#[inline]
pub fn agents_collide(p: Vec3, q: Vec3, shape: BodyShape) -> bool {
    agent_separation(p, q, shape) < 1.0
}

#[inline]
pub fn hits_obstacle(p: Vec3, obstacle: &Obstacle, shape: BodyShape) -> bool {
    obstacle_separation(p, obstacle, shape) < 1.0
}

/// Every colliding pair found in one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    /// Ordered agent pairs `(i, j)`, `i != j`, with their separation.  A
    /// colliding pair appears once in each order.
    pub agent_pairs: Vec<(AgentId, AgentId, f64)>,
    /// Agent–obstacle pairs with their separation.
    pub obstacle_pairs: Vec<(AgentId, ObstacleId, f64)>,
}

impl CollisionReport {
    #[inline]
    pub fn agent_collision(&self) -> bool {
        !self.agent_pairs.is_empty()
    }

    #[inline]
    pub fn obstacle_collision(&self) -> bool {
        !self.obstacle_pairs.is_empty()
    }
}

/// Test every ordered agent pair and every agent–obstacle pair on the
/// snapshot's current positions (column 0 only, not the planned horizon).
///
/// Each hit is logged when `verbosity` selects collision diagnostics.
pub fn check_collisions(
    snapshot:  &SwarmSnapshot,
    obstacles: &[Obstacle],
    shape:     BodyShape,
    tick:      Tick,
    verbosity: Verbosity,
) -> CollisionReport {
    let positions = snapshot.positions();
    let mut report = CollisionReport::default();

    for (i, &p) in positions.iter().enumerate() {
        let agent = AgentId(i as u32);

        for (j, &q) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let s = agent_separation(p, q, shape);
            if s < 1.0 {
                let other = AgentId(j as u32);
                if verbosity.collisions() {
                    warn!(%agent, %other, separation = s, %tick, "collision between agents");
                }
                report.agent_pairs.push((agent, other, s));
            }
        }

        for (m, obstacle) in obstacles.iter().enumerate() {
            let s = obstacle_separation(p, obstacle, shape);
            if s < 1.0 {
                let obstacle_id = ObstacleId(m as u32);
                if verbosity.collisions() {
                    warn!(%agent, obstacle = %obstacle_id, separation = s, %tick, "collision between agent and obstacle");
                }
                report.obstacle_pairs.push((agent, obstacle_id, s));
            }
        }
    }

    report
}
