//! `fd-core` — foundational types for the `rust_fd` fire-dispatch workspace.
//!
//! This crate is a dependency of every other `fd-*` crate.  It intentionally
//! has no `fd-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `FirefighterId`, `BuildingId`             |
//! | [`grid`] | `GridPoint`, taxicab distance             |
//! | [`rng`]  | `SimRng` (seeded, deterministic)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod grid;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::GridPoint;
pub use ids::{BuildingId, FirefighterId};
pub use rng::SimRng;
