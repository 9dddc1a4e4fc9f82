//! `swarm-output`: run artifact writers for the swarm simulator.
//!
//! One backend is provided:
//!
//! | Backend         | Files created                                          |
//! |-----------------|--------------------------------------------------------|
//! | `CsvJsonWriter` | `sim_info.json`, `sim_data.csv`, `sim_results.json`    |
//!
//! `sim_results.json` exists only for successful runs.  Backends implement
//! [`RunWriter`] and are driven by [`RunRecorder`], which implements
//! `swarm_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swarm_output::{CsvJsonWriter, RunRecorder};
//!
//! let writer = CsvJsonWriter::new(Path::new("./output"))?;
//! let mut recorder = RunRecorder::new(writer);
//! sim.run(&mut recorder)?;
//! recorder.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod error;
pub mod files;
pub mod recorder;
pub mod row;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use files::CsvJsonWriter;
pub use recorder::RunRecorder;
pub use row::{PositionRow, RunResults, ScenarioInfo, position_rows};
pub use writer::RunWriter;
