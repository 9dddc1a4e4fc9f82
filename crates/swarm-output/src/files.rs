//! CSV + JSON output backend.
//!
//! Creates up to three files in the configured output directory:
//! - `sim_info.json`: scenario echo, written at run start
//! - `sim_data.csv`: position log, `tick,agent_id,axis,sample,value`
//! - `sim_results.json`: metrics, written only for successful runs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::RunWriter;
use crate::{OutputResult, PositionRow, RunResults, ScenarioInfo};

pub const INFO_FILE: &str = "sim_info.json";
pub const DATA_FILE: &str = "sim_data.csv";
pub const RESULTS_FILE: &str = "sim_results.json";

/// Writes the run artifacts as one CSV log plus two JSON documents.
pub struct CsvJsonWriter {
    dir:      PathBuf,
    data:     Writer<File>,
    finished: bool,
}

impl CsvJsonWriter {
    /// Create `sim_data.csv` in `dir` and write its header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut data = Writer::from_path(dir.join(DATA_FILE))?;
        data.write_record(["tick", "agent_id", "axis", "sample", "value"])?;
        Ok(Self { dir: dir.to_path_buf(), data, finished: false })
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(self.dir.join(name))?);
        serde_json::to_writer_pretty(&mut out, value)?;
        out.flush()?;
        Ok(())
    }
}

impl RunWriter for CsvJsonWriter {
    fn write_info(&mut self, info: &ScenarioInfo) -> OutputResult<()> {
        self.write_json(INFO_FILE, info)
    }

    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.data.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.axis.to_string(),
                row.sample.to_string(),
                row.value.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_results(&mut self, results: &RunResults) -> OutputResult<()> {
        self.write_json(RESULTS_FILE, results)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.data.flush()?;
        Ok(())
    }
}
