//! Simulation observer trait for progress reporting and run persistence.

use swarm_agent::SwarmSnapshot;
use swarm_core::Tick;

use crate::{RunReport, ScenarioEcho};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, snapshot: &SwarmSnapshot) {
///         println!("{tick}: agent 0 at {}", snapshot.position(AgentId(0)));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick.
    fn on_run_start(&mut self, _echo: &ScenarioEcho) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick's checks with the snapshot that was broadcast
    /// to the solvers that tick.
    fn on_tick_end(&mut self, _tick: Tick, _snapshot: &SwarmSnapshot) {}

    /// Called once after the last tick, on every outcome.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
