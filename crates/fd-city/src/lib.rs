//! `fd-city` — city grid, building registry, and fire-station placement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`building`] | `Building` (location + burning state)             |
//! | [`grid`]     | `CityGrid` (registry + lookup), `CityGridBuilder` |
//! | [`error`]    | `CityError`, `CityResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod building;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use building::Building;
pub use error::{CityError, CityResult};
pub use grid::{CityGrid, CityGridBuilder};
