//! Per-tick separation metrics.
//!
//! Measured on the kinematic state each solver reported for this tick.

use swarm_agent::AgentStore;

/// Minimum separations of one tick.  `None` when the quantity is undefined
/// (fewer than two agents, or no obstacles).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Separation {
    pub inter_agent:    Option<f64>,
    pub agent_obstacle: Option<f64>,
}

/// Smallest centre-to-centre distance over unordered agent pairs `i < j`.
pub fn min_inter_agent_distance(store: &AgentStore) -> Option<f64> {
    let records = store.records();
    let mut min: Option<f64> = None;
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            let d = a.state.position.distance(b.state.position);
            min = Some(min.map_or(d, |m| m.min(d)));
        }
    }
    min
}

/// Smallest agent–obstacle clearance over all (agent, obstacle) pairs.
///
/// Clearance is the horizontal centre distance minus the obstacle's first
/// half-extent, plus the agent's body half-length and safety buffer.
pub fn min_agent_obstacle_distance(store: &AgentStore) -> Option<f64> {
    let mut min: Option<f64> = None;
    for record in store.records() {
        for obstacle in record.obstacles.iter() {
            let d = (record.state.position - obstacle.center).norm_xy() - obstacle.half_extents.x
                + record.body_half_length
                + record.safety_buffer;
            min = Some(min.map_or(d, |m| m.min(d)));
        }
    }
    min
}

pub fn measure_separation(store: &AgentStore) -> Separation {
    Separation {
        inter_agent:    min_inter_agent_distance(store),
        agent_obstacle: min_agent_obstacle_distance(store),
    }
}
