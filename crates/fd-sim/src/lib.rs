//! `fd-sim` — wave-driven simulation runner.
//!
//! # Wave loop
//!
//! ```text
//! for wave in 0..config.waves:
//!   ① Generate — sample distinct building locations via the seeded RNG.
//!   ② Ignite   — mark each sampled building burning.
//!   ③ Dispatch — greedy nearest-assignment over the roster, in wave order;
//!                every assigned fire is extinguished.
//!   ④ Observe  — on_wave_end / on_roster_snapshot hooks.
//! ```
//!
//! The loop is single-threaded and fully deterministic: the same
//! [`SimConfig::seed`] over the same city always reproduces the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fd_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let config = SimConfig { waves: 10, fires_per_wave: 3, seed: 42 };
//! let mut sim = SimBuilder::new(config, city, /*firefighters=*/ 4).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod wave;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::FireSim;
pub use wave::{FireWave, WaveGenerator};
