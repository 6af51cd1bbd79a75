//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fd_dispatch::{Assignment, Firefighter};
use fd_sim::{FireWave, SimObserver};

use crate::row::{AssignmentRow, WaveSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes assignment logs and wave summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    fleet_total: u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fleet_total: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_wave_end(&mut self, wave: &FireWave, assignments: &[Assignment]) {
        let rows: Vec<AssignmentRow> = assignments
            .iter()
            .map(|a| AssignmentRow {
                wave:           wave.index,
                firefighter_id: a.firefighter.0,
                fire_x:         a.fire.x,
                fire_y:         a.fire.y,
                distance:       a.distance,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_assignments(&rows);
            self.store_err(result);
        }

        let wave_distance: u64 = assignments.iter().map(|a| a.distance).sum();
        self.fleet_total += wave_distance;
        let summary = WaveSummaryRow {
            wave:           wave.index,
            fires:          assignments.len() as u64,
            wave_distance,
            fleet_distance: self.fleet_total,
        };
        let result = self.writer.write_wave_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _waves_run: u64, _roster: &[Firefighter]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
