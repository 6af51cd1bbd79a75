//! Fire-wave generation.

use fd_core::{GridPoint, SimRng};

/// One batch of burning-building locations, dispatched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireWave {
    /// Zero-based wave index.
    pub index: u64,

    /// Fire locations in dispatch order.
    pub fires: Vec<GridPoint>,
}

/// Samples each wave's fire locations from a fixed candidate pool.
///
/// Locations within one wave are distinct (a building burns once per wave);
/// across waves the pool is re-sampled, so the same building can catch fire
/// again later.  All draws come from one seeded [`SimRng`], making the whole
/// sequence of waves a pure function of the seed.
pub struct WaveGenerator {
    rng:            SimRng,
    candidates:     Vec<GridPoint>,
    fires_per_wave: usize,
    next_index:     u64,
}

impl WaveGenerator {
    /// `candidates` is the pool of building locations to sample from —
    /// normally `CityGrid::building_locations()`.
    pub fn new(seed: u64, candidates: Vec<GridPoint>, fires_per_wave: usize) -> Self {
        Self {
            rng: SimRng::new(seed),
            candidates,
            fires_per_wave,
            next_index: 0,
        }
    }

    /// Produce the next wave.  Never fails: the sample size is clamped to
    /// the candidate pool (the builder validates it upstream anyway).
    pub fn next_wave(&mut self) -> FireWave {
        let fires = self
            .rng
            .sample(&self.candidates, self.fires_per_wave)
            .into_iter()
            .copied()
            .collect();
        let wave = FireWave {
            index: self.next_index,
            fires,
        };
        self.next_index += 1;
        wave
    }
}
