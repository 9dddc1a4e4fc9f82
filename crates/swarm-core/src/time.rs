//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter on a uniform grid.  The
//! tick length is derived from the planning window:
//!
//!   dt = t_plan / num
//!
//! where `num` is the number of samples in every planned trajectory.  A run
//! is given a budget of `ceil(max_time / dt)` ticks; integer ticks keep the
//! loop bound exact while `TickClock` maps them back to mission seconds.

use std::fmt;

use crate::{CoreError, CoreResult, Verbosity};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` for the very first tick of a run.
    #[inline]
    pub fn is_first(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and mission seconds.
///
/// `TickClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Seconds of mission time per tick.
    pub dt: f64,
    /// Current tick, advanced by `TickClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Mission seconds covered by `ticks` completed ticks.
    #[inline]
    pub fn secs_for_ticks(&self, ticks: u64) -> f64 {
        ticks as f64 * self.dt
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Run-level parameters of one point-to-point mission.
///
/// Typically produced by `swarm-scenario` from the YAML parameter file and
/// handed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Samples per planned trajectory (`num`).
    pub horizon: usize,

    /// Length of the planning window in seconds (`t_plan`).
    pub t_plan: f64,

    /// Mission time budget in seconds.
    pub max_time: f64,

    /// An agent counts as arrived when its distance to goal is strictly below
    /// this value.
    pub dist_stop: f64,

    /// Diagnostic logging level.
    pub verbosity: Verbosity,

    /// Master RNG seed for per-agent solver noise.
    pub seed: u64,

    /// Worker thread count for the solver dispatch.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,

    /// Discard every obstacle from the scenario.
    pub free_space: bool,

    /// Ask the solver to use its richer dynamics model.
    pub use_model: bool,
}

impl RunConfig {
    /// Tick length `t_plan / horizon`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.t_plan / self.horizon as f64
    }

    /// Tick budget `ceil(max_time / dt)`.
    pub fn max_ticks(&self) -> u64 {
        let ticks = (self.max_time / self.dt()).ceil();
        if ticks.is_finite() && ticks > 0.0 { ticks as u64 } else { 0 }
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.dt())
    }

    /// Reject parameters that make the tick grid meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.horizon == 0 {
            return Err(CoreError::Config("horizon (num) must be at least 1".into()));
        }
        if !(self.t_plan.is_finite() && self.t_plan > 0.0) {
            return Err(CoreError::Config(format!("t_plan must be positive, got {}", self.t_plan)));
        }
        if !(self.max_time.is_finite() && self.max_time >= 0.0) {
            return Err(CoreError::Config(format!("max_time must be non-negative, got {}", self.max_time)));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
