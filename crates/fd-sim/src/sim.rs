//! The `FireSim` struct and its wave loop.

use fd_city::CityGrid;
use fd_dispatch::FireDispatch;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::observer::SimObserver;
use crate::wave::WaveGenerator;

/// The main simulation runner.
///
/// `FireSim<D>` owns the city and the dispatcher and drives the wave loop:
/// generate, ignite, dispatch, observe.  Create via
/// [`SimBuilder`][crate::SimBuilder].
///
/// # Type parameter
///
/// `D` is the dispatch strategy.  The builder wires in
/// [`NearestDispatch`][fd_dispatch::NearestDispatch]; swap the type for a
/// different assignment policy with no runtime overhead.
pub struct FireSim<D: FireDispatch> {
    /// Global configuration (wave count, fires per wave, seed).
    pub config: SimConfig,

    /// The city: building registry, fire state, fire station.
    pub city: CityGrid,

    /// The dispatch coordinator.  Owns the roster for the sim's lifetime.
    pub dispatch: D,

    pub(crate) waves:     WaveGenerator,
    pub(crate) waves_run: u64,
}

impl<D: FireDispatch> FireSim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Waves completed so far.
    pub fn waves_run(&self) -> u64 {
        self.waves_run
    }

    /// Run from the current wave to `config.waves`.
    ///
    /// Calls observer hooks at every wave boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.waves_run < self.config.waves {
            self.process_wave(observer)?;
        }
        observer.on_sim_end(self.waves_run, self.dispatch.roster());
        Ok(())
    }

    /// Run exactly `n` waves from the current position (ignores
    /// `config.waves`).  Useful for tests and incremental stepping.
    pub fn run_waves<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_wave(observer)?;
        }
        Ok(())
    }

    // ── Core wave processing ──────────────────────────────────────────────

    fn process_wave<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let wave = self.waves.next_wave();
        observer.on_wave_start(&wave);

        // Ignite first: dispatch consumes locations, not burning state, but
        // the extinguish step must have a live fire to put out.
        for &fire in &wave.fires {
            self.city.ignite(fire)?;
        }

        let assignments = self.dispatch.dispatch(&mut self.city, &wave.fires)?;

        observer.on_wave_end(&wave, &assignments);
        observer.on_roster_snapshot(wave.index, self.dispatch.roster());
        self.waves_run += 1;
        Ok(())
    }
}
