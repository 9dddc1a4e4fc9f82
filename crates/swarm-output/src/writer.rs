//! The `RunWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow, RunResults, ScenarioInfo};

/// Sink for the three run artifacts.
///
/// Errors are stored by [`RunRecorder`][crate::RunRecorder] and retrieved
/// with [`take_error`][crate::RunRecorder::take_error].
pub trait RunWriter {
    /// Write the scenario echo.  Called once, before the first tick.
    fn write_info(&mut self, info: &ScenarioInfo) -> OutputResult<()>;

    /// Append one tick's position rows.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write the metrics record of a successful run.
    fn write_results(&mut self, results: &RunResults) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
