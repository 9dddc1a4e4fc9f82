//! `swarm-core`: foundational types for the swarm point-to-point simulator.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It has no
//! `swarm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ObstacleId`                               |
//! | [`geom`]        | `Vec3`, `BodyShape`, `Obstacle`                       |
//! | [`time`]        | `Tick`, `TickClock`, `RunConfig`                      |
//! | [`verbosity`]   | `Verbosity` diagnostic gating levels                  |
//! | [`rng`]         | `AgentRng` (per-agent, deterministic)                 |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;
pub mod verbosity;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geom::{BodyShape, Obstacle, Vec3};
pub use ids::{AgentId, ObstacleId};
pub use rng::AgentRng;
pub use time::{RunConfig, Tick, TickClock};
pub use verbosity::Verbosity;
