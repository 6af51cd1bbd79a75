//! Run configuration.

/// Top-level simulation configuration.
///
/// Typically assembled by the application binary and passed to
/// [`SimBuilder`][crate::SimBuilder], which validates it against the city.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of fire waves to run.
    pub waves: u64,

    /// Burning buildings sampled per wave.  Must be at least 1 and no more
    /// than the city's building count.
    pub fires_per_wave: usize,

    /// Master RNG seed.  The same seed always produces identical waves.
    pub seed: u64,
}
