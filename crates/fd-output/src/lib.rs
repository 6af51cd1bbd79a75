//! `fd-output` — simulation report writers for the rust_fd workspace.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                 | Rows                                          |
//! |----------------------|-----------------------------------------------|
//! | `assignments.csv`    | one per assignment (wave, firefighter, fire)  |
//! | `wave_summaries.csv` | one per wave (fires, distances)               |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `fd_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AssignmentRow, WaveSummaryRow};
pub use writer::OutputWriter;
