//! `swarm-sim`: tick loop orchestrator for the swarm simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..max_ticks:
//!   ① Share:     rebuild the SwarmSnapshot (tick 0: initial positions,
//!                 later: every agent's latest plan).
//!   ② Solve:     AgentSolver::solve once per agent (parallel with the
//!                 `parallel` feature); hard barrier.
//!   ③ Collide:   every ordered agent pair and agent–obstacle pair on the
//!                 snapshot's current positions; sticky flags.
//!   ④ Bounds:    quantized position / velocity / thrust checks.
//!   ⑤ Goal:      bump mpc_step; success iff every agent is inside the
//!                 stop distance.
//!   ⑥ Distances: per-tick minimum separations.
//!   ⑦ Persist:   SimObserver::on_tick_end with the snapshot.
//!   then stop on: success → collision → out of bounds → infeasible.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the solve phase on Rayon (default).               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use swarm_scenario::load_scenario_path;
//! use swarm_sim::{NoopObserver, SimBuilder};
//! use swarm_solver::StraightLineSolver;
//!
//! let scenario = load_scenario_path(Path::new("scenario.yaml"))?;
//! let mut sim = SimBuilder::new(scenario, StraightLineSolver::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{}", report.cause);
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod report;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{NO_DISTANCE, RunMetrics};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunReport, ScenarioEcho};
pub use sim::Sim;
pub use state::{SimulationState, TerminalCause};
