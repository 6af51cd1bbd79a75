//! Simulation observer trait for progress reporting and data collection.

use fd_dispatch::{Assignment, Firefighter};

use crate::wave::FireWave;

/// Callbacks invoked by [`FireSim::run`][crate::FireSim::run] at key points
/// in the wave loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_wave_end(&mut self, wave: &FireWave, assignments: &[Assignment]) {
///         println!("wave {}: {} fires dispatched", wave.index, assignments.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after a wave is generated, before any building is ignited.
    fn on_wave_start(&mut self, _wave: &FireWave) {}

    /// Called after every fire in the wave has been dispatched and
    /// extinguished.  `assignments` is in dispatch order.
    fn on_wave_end(&mut self, _wave: &FireWave, _assignments: &[Assignment]) {}

    /// Called at the end of each wave with read-only access to the full
    /// roster, so output writers can record positions and running totals
    /// without the sim knowing about any specific output format.
    fn on_roster_snapshot(&mut self, _wave_index: u64, _roster: &[Firefighter]) {}

    /// Called once after the final wave completes.
    fn on_sim_end(&mut self, _waves_run: u64, _roster: &[Firefighter]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
