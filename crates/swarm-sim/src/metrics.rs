//! End-of-run statistics, computed only for successful runs.

use swarm_agent::AgentStore;

use crate::SimulationState;

/// Reported for a minimum distance whose accumulator is empty (fewer than
/// two agents, or no obstacles).
pub const NO_DISTANCE: f64 = 10_000.0;

/// Aggregated metrics of a successful run, in persisted order.
#[derive(Clone, Debug, PartialEq)]
pub struct RunMetrics {
    pub total_ticks: u64,
    pub compute_secs_per_tick: Vec<f64>,
    /// Root-sum-of-squares of each agent's per-tick smoothness terms.
    pub smoothness_per_agent: Vec<f64>,
    /// Sum of each agent's per-tick arc lengths.
    pub path_length_per_agent: Vec<f64>,
    pub min_inter_agent_per_tick: Vec<f64>,
    pub min_agent_obstacle_per_tick: Vec<f64>,
    pub mission_time: f64,
    pub total_compute_secs: f64,
    pub avg_compute_per_tick: f64,
    pub avg_compute_per_tick_per_agent: f64,
    pub avg_smoothness: f64,
    pub avg_path_length: f64,
    pub avg_inter_agent_distance: f64,
    pub min_inter_agent_distance: f64,
    pub avg_agent_obstacle_distance: f64,
    pub min_agent_obstacle_distance: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(NO_DISTANCE)
}

impl RunMetrics {
    /// Fold the run accumulators and the agents' cost histories.
    ///
    /// `total_compute_secs` is the wall time of the whole tick loop.
    pub fn aggregate(
        state:              &SimulationState,
        agents:             &AgentStore,
        dt:                 f64,
        total_compute_secs: f64,
    ) -> Self {
        let ticks = state.ticks_completed;

        let smoothness: Vec<f64> = agents
            .records()
            .iter()
            .map(|r| r.smoothness_terms().iter().map(|s| s * s).sum::<f64>().sqrt())
            .collect();
        let path_length: Vec<f64> = agents
            .records()
            .iter()
            .map(|r| r.arc_length_terms().iter().sum())
            .collect();

        let avg_compute_per_tick = if ticks > 0 { total_compute_secs / ticks as f64 } else { 0.0 };
        let avg_compute_per_tick_per_agent = if agents.is_empty() {
            0.0
        } else {
            avg_compute_per_tick / agents.count() as f64
        };

        Self {
            total_ticks: ticks,
            compute_secs_per_tick: state.compute_secs.clone(),
            avg_smoothness: mean(&smoothness),
            avg_path_length: mean(&path_length),
            smoothness_per_agent: smoothness,
            path_length_per_agent: path_length,
            min_inter_agent_per_tick: state.min_inter_agent.clone(),
            min_agent_obstacle_per_tick: state.min_agent_obstacle.clone(),
            mission_time: ticks as f64 * dt,
            total_compute_secs,
            avg_compute_per_tick,
            avg_compute_per_tick_per_agent,
            avg_inter_agent_distance: mean(&state.min_inter_agent),
            min_inter_agent_distance: minimum(&state.min_inter_agent),
            avg_agent_obstacle_distance: mean(&state.min_agent_obstacle),
            min_agent_obstacle_distance: minimum(&state.min_agent_obstacle),
        }
    }
}
