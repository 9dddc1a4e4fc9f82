//! `swarm-agent`: per-drone state and the shared per-tick snapshot.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`record`]      | `AgentRecord`, `Trajectory`, `KinematicState`             |
//! | [`store`]       | `AgentStore` (record arena), `AgentRngs` (per-agent RNG)  |
//! | [`builder`]     | `AgentStoreBuilder` (construction from scenario data)     |
//! | [`snapshot`]    | `SwarmSnapshot`, `Axis`                                   |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Ownership model
//!
//! The orchestrator owns the [`AgentStore`].  During the solve phase every
//! task receives `&mut` to exactly one [`AgentRecord`] slot plus `&` to the
//! tick's [`SwarmSnapshot`]; nothing else is shared, so no locks are needed.

pub mod builder;
pub mod error;
pub mod record;
pub mod snapshot;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use record::{AgentRecord, KinematicState, Trajectory};
pub use snapshot::{Axis, SwarmSnapshot};
pub use store::{AgentRngs, AgentStore};
