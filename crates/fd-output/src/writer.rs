//! The `OutputWriter` trait implemented by backend writers.

use crate::{AssignmentRow, OutputResult, WaveSummaryRow};

/// Trait implemented by report backends (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of assignment rows.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Write one wave summary row.
    fn write_wave_summary(&mut self, row: &WaveSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
