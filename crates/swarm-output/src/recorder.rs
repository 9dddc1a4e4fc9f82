//! `RunRecorder<W>`: bridges `SimObserver` to a `RunWriter`.

use swarm_agent::SwarmSnapshot;
use swarm_core::Tick;
use swarm_sim::{RunReport, ScenarioEcho, SimObserver};

use crate::row::{RunResults, ScenarioInfo, position_rows};
use crate::writer::RunWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that persists the scenario echo, every tick's snapshot
/// and, on success, the run metrics to any [`RunWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// The writer is finished at run end and again (a no-op by then) when the
/// recorder is dropped, so files are closed on every exit path.
pub struct RunRecorder<W: RunWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: RunWriter> RunRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and close the writer now.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: RunWriter> SimObserver for RunRecorder<W> {
    fn on_run_start(&mut self, echo: &ScenarioEcho) {
        let result = self.writer.write_info(&ScenarioInfo::from(echo));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _tick: Tick, snapshot: &SwarmSnapshot) {
        let rows = position_rows(snapshot);
        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, report: &RunReport) {
        if let Some(results) = RunResults::from_report(report) {
            let result = self.writer.write_results(&results);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}

impl<W: RunWriter> Drop for RunRecorder<W> {
    fn drop(&mut self) {
        let _ = self.writer.finish();
    }
}
