//! Scenario loaders.
//!
//! # YAML parameter file
//!
//! See [`ScenarioFile`][crate::ScenarioFile] for the key set.
//!
//! # Config-data triple file
//!
//! Benchmark scenarios ship start/goal pairs and obstacles as a flat stream
//! of whitespace-separated `x y z` triples, in this order:
//!
//! ```text
//! num_drone × initial position
//! num_drone × goal position
//! num_obs   × obstacle centre
//! num_obs   × obstacle half-extent
//! ```
//!
//! Line breaks carry no meaning; only the triple order does.  Trailing
//! triples beyond the expected count are ignored.

use std::io::Read;
use std::path::Path;

use swarm_core::Vec3;
use tracing::debug;

use crate::{Placement, Scenario, ScenarioError, ScenarioFile, ScenarioResult};

// ── YAML ──────────────────────────────────────────────────────────────────────

/// Load a scenario from a YAML parameter file.
///
/// An unreadable file is a hard error.
pub fn load_scenario_path(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario_path`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let file: ScenarioFile = serde_yaml::from_reader(reader)?;
    let scenario = file.into_scenario();
    scenario.run.validate()?;
    debug!(
        agents = scenario.data.requested_agents,
        pairs = scenario.data.placement.pair_count(),
        obstacles = scenario.data.placement.obstacle_positions.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

// ── Config-data triples ───────────────────────────────────────────────────────

/// Load a placement of `num_drone` agents and `num_obs` obstacles from a
/// config-data triple file.
pub fn load_placement_path(path: &Path, num_drone: usize, num_obs: usize) -> ScenarioResult<Placement> {
    let file = std::fs::File::open(path)?;
    load_placement_reader(file, num_drone, num_obs)
}

/// Like [`load_placement_path`] but accepts any `Read` source.
pub fn load_placement_reader<R: Read>(
    mut reader: R,
    num_drone: usize,
    num_obs: usize,
) -> ScenarioResult<Placement> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let values = text
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| ScenarioError::Parse(format!("invalid number {tok:?} in config data")))
        })
        .collect::<ScenarioResult<Vec<f64>>>()?;

    let triples: Vec<Vec3> = values
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect();

    let needed = 2 * num_drone + 2 * num_obs;
    if triples.len() < needed {
        return Err(ScenarioError::Parse(format!(
            "config data holds {} triples, expected {needed} for {num_drone} drones and {num_obs} obstacles",
            triples.len()
        )));
    }

    let (init, rest) = triples.split_at(num_drone);
    let (goal, rest) = rest.split_at(num_drone);
    let (obs_pos, rest) = rest.split_at(num_obs);
    let obs_dim = &rest[..num_obs];

    Ok(Placement {
        init:                  init.to_vec(),
        goal:                  goal.to_vec(),
        obstacle_positions:    obs_pos.to_vec(),
        obstacle_half_extents: obs_dim.to_vec(),
    })
}
