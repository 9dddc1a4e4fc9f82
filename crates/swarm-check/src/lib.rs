//! `swarm-check`: per-tick safety checks and separation metrics.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`collision`]   | ellipsoid agent–agent and agent–obstacle overlap tests        |
//! | [`violation`]   | quantized position / velocity / thrust bound checks           |
//! | [`distance`]    | minimum inter-agent and agent–obstacle separation per tick    |
//!
//! Every check is exhaustive: a hit never stops the scan, so the returned
//! report (and the log) names every offending pair or axis of the tick.

pub mod collision;
pub mod distance;
pub mod violation;


pub use collision::{
    CollisionReport, agent_separation, agents_collide, check_collisions, hits_obstacle,
    obstacle_separation,
};
pub use distance::{Separation, measure_separation, min_agent_obstacle_distance, min_inter_agent_distance};
pub use violation::{Violation, ViolationReport, check_state, check_violations, thrust_magnitude};
