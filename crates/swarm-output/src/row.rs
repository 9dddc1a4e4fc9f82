//! Plain data records written by output backends.

use serde::Serialize;
use swarm_agent::{Axis, SwarmSnapshot};
use swarm_core::{AgentId, Vec3};
use swarm_sim::{RunMetrics, RunReport, ScenarioEcho};

/// One value of the position log: sample `sample` of agent `agent_id`'s
/// broadcast row on `axis` at `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub axis:     Axis,
    pub sample:   u32,
    pub value:    f64,
}

/// Flatten a snapshot into position rows, ordered by agent, axis, sample.
pub fn position_rows(snapshot: &SwarmSnapshot) -> Vec<PositionRow> {
    let tick = snapshot.tick().0;
    let mut rows = Vec::with_capacity(snapshot.agent_count() * 3 * snapshot.horizon());
    for agent in (0..snapshot.agent_count() as u32).map(AgentId) {
        for axis in Axis::ALL {
            for (k, &value) in snapshot.row(axis, agent).iter().enumerate() {
                rows.push(PositionRow { tick, agent_id: agent.0, axis, sample: k as u32, value });
            }
        }
    }
    rows
}

/// Scenario echo as persisted in `sim_info.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioInfo {
    pub num_drone:      usize,
    pub num_obs:        usize,
    pub dt:             f64,
    /// Ellipsoid half-axes `[a, b, c]`.
    pub shape:          [f64; 3],
    pub init_drone:     Vec<[f64; 3]>,
    pub goal_drone:     Vec<[f64; 3]>,
    pub pos_static_obs: Vec<[f64; 3]>,
    pub dim_static_obs: Vec<[f64; 3]>,
}

fn triples(points: impl Iterator<Item = Vec3>) -> Vec<[f64; 3]> {
    points.map(Vec3::to_array).collect()
}

impl From<&ScenarioEcho> for ScenarioInfo {
    fn from(echo: &ScenarioEcho) -> Self {
        Self {
            num_drone:      echo.agent_count,
            num_obs:        echo.obstacle_count(),
            dt:             echo.dt,
            shape:          [echo.shape.a, echo.shape.b, echo.shape.c],
            init_drone:     triples(echo.init.iter().copied()),
            goal_drone:     triples(echo.goal.iter().copied()),
            pos_static_obs: triples(echo.obstacles.iter().map(|o| o.center)),
            dim_static_obs: triples(echo.obstacles.iter().map(|o| o.half_extents)),
        }
    }
}

/// Metrics record of a successful run as persisted in `sim_results.json`.
///
/// Field order is the persisted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResults {
    pub total_ticks:                    u64,
    pub compute_secs_per_tick:          Vec<f64>,
    pub smoothness_per_agent:           Vec<f64>,
    pub path_length_per_agent:          Vec<f64>,
    pub min_inter_agent_per_tick:       Vec<f64>,
    pub min_agent_obstacle_per_tick:    Vec<f64>,
    pub mission_time:                   f64,
    pub total_compute_secs:             f64,
    pub avg_compute_per_tick:           f64,
    pub avg_compute_per_tick_per_agent: f64,
    pub avg_smoothness:                 f64,
    pub avg_path_length:                f64,
    pub avg_inter_agent_distance:       f64,
    pub min_inter_agent_distance:       f64,
    pub avg_agent_obstacle_distance:    f64,
    pub min_agent_obstacle_distance:    f64,
}

impl From<&RunMetrics> for RunResults {
    fn from(m: &RunMetrics) -> Self {
        Self {
            total_ticks:                    m.total_ticks,
            compute_secs_per_tick:          m.compute_secs_per_tick.clone(),
            smoothness_per_agent:           m.smoothness_per_agent.clone(),
            path_length_per_agent:          m.path_length_per_agent.clone(),
            min_inter_agent_per_tick:       m.min_inter_agent_per_tick.clone(),
            min_agent_obstacle_per_tick:    m.min_agent_obstacle_per_tick.clone(),
            mission_time:                   m.mission_time,
            total_compute_secs:             m.total_compute_secs,
            avg_compute_per_tick:           m.avg_compute_per_tick,
            avg_compute_per_tick_per_agent: m.avg_compute_per_tick_per_agent,
            avg_smoothness:                 m.avg_smoothness,
            avg_path_length:                m.avg_path_length,
            avg_inter_agent_distance:       m.avg_inter_agent_distance,
            min_inter_agent_distance:       m.min_inter_agent_distance,
            avg_agent_obstacle_distance:    m.avg_agent_obstacle_distance,
            min_agent_obstacle_distance:    m.min_agent_obstacle_distance,
        }
    }
}

impl RunResults {
    /// Metrics of `report`, or `None` when the run did not succeed.
    pub fn from_report(report: &RunReport) -> Option<Self> {
        report.metrics.as_ref().map(Self::from)
    }
}
