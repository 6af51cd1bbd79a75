//! Fluent builder for constructing a [`FireSim`].

use fd_city::CityGrid;
use fd_dispatch::{FireDispatch, NearestDispatch};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::sim::FireSim;
use crate::wave::WaveGenerator;

/// Validate-then-assemble builder for [`FireSim<NearestDispatch>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — wave count, fires per wave, seed
/// - [`CityGrid`] — the city to burn down and protect
/// - `firefighters` — crew size hired at the fire station before wave 0
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, city, 4).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    city:         CityGrid,
    firefighters: usize,
}

impl SimBuilder {
    pub fn new(config: SimConfig, city: CityGrid, firefighters: usize) -> Self {
        Self {
            config,
            city,
            firefighters,
        }
    }

    /// Validate inputs, hire the crew, and return a ready-to-run [`FireSim`].
    pub fn build(self) -> SimResult<FireSim<NearestDispatch>> {
        if self.firefighters == 0 {
            return Err(SimError::Config(
                "at least one firefighter must be hired".into(),
            ));
        }
        if self.config.fires_per_wave == 0 {
            return Err(SimError::Config("fires_per_wave must be nonzero".into()));
        }
        if self.config.fires_per_wave > self.city.building_count() {
            return Err(SimError::Config(format!(
                "fires_per_wave ({}) exceeds building count ({})",
                self.config.fires_per_wave,
                self.city.building_count()
            )));
        }

        let mut dispatch = NearestDispatch::new(&self.city);
        dispatch.hire(self.firefighters)?;

        let waves = WaveGenerator::new(
            self.config.seed,
            self.city.building_locations(),
            self.config.fires_per_wave,
        );

        Ok(FireSim {
            config: self.config,
            city: self.city,
            dispatch,
            waves,
            waves_run: 0,
        })
    }
}
