//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `assignments.csv`
//! - `wave_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, OutputResult, WaveSummaryRow};

/// Writes simulation reports to two CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["wave", "firefighter_id", "fire_x", "fire_y", "distance"])?;

        let mut summaries = Writer::from_path(dir.join("wave_summaries.csv"))?;
        summaries.write_record(["wave", "fires", "wave_distance", "fleet_distance"])?;

        Ok(Self {
            assignments,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.wave.to_string(),
                row.firefighter_id.to_string(),
                row.fire_x.to_string(),
                row.fire_y.to_string(),
                row.distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_wave_summary(&mut self, row: &WaveSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.wave.to_string(),
            row.fires.to_string(),
            row.wave_distance.to_string(),
            row.fleet_distance.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
