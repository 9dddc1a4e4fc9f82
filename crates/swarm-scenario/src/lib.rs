//! `swarm-scenario`: the scenario consumed by the simulator core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`data`]      | `ScenarioData`, `KinematicLimits`, obstacle list validation |
//! | [`file`]      | `ScenarioFile`: serde model of the YAML parameter file      |
//! | [`loader`]    | YAML loading and config-data triple loading                 |
//! | [`error`]     | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! A [`Scenario`] pairs the run-level [`RunConfig`][swarm_core::RunConfig]
//! with the geometric [`ScenarioData`].  The core never reads files itself;
//! applications load a `Scenario` here and hand it to `swarm-sim`.

pub mod data;
pub mod error;
pub mod file;
pub mod loader;


pub use data::{KinematicLimits, Placement, Scenario, ScenarioData};
pub use error::{ScenarioError, ScenarioResult};
pub use file::ScenarioFile;
pub use loader::{load_placement_path, load_placement_reader, load_scenario_path, load_scenario_reader};
