//! `swarm-solver`: the per-agent planner seam and two reference planners.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`context`]  | `SolveContext<'a>`: read-only tick view shared by every solve     |
//! | [`model`]    | `AgentSolver` trait                                               |
//! | [`hold`]     | `HoldSolver`: agents stay where they are                          |
//! | [`straight`] | `StraightLineSolver`: limited straight-line approach to the goal  |
//! | [`error`]    | `SolverError`, `SolverResult<T>`                                  |
//!
//! # Design notes
//!
//! One tick of the orchestrator calls [`AgentSolver::solve`] once per agent,
//! possibly on many Rayon workers at once.  Each call gets `&mut` to its own
//! record and RNG and `&` to the tick's snapshot, so a solver never needs
//! interior mutability: it is `Send + Sync` and stateless across agents.

pub mod context;
pub mod error;
pub mod hold;
pub mod model;
pub mod straight;

#[cfg(test)]
mod tests;

pub use context::SolveContext;
pub use error::{SolverError, SolverResult};
pub use hold::HoldSolver;
pub use model::AgentSolver;
pub use straight::StraightLineSolver;
