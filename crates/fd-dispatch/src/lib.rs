//! `fd-dispatch` — firefighter roster and greedy nearest-assignment dispatch.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`firefighter`] | `Firefighter` (position + cumulative distance)       |
//! | [`dispatch`]    | `FireDispatch` trait, `NearestDispatch`, `Assignment`|
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                 |
//!
//! # Assignment model
//!
//! Dispatch is greedy and strictly ordered: each burning location in the
//! input batch is matched, in input order, to the roster member with the
//! minimum taxicab distance at that moment.  Ties go to the lowest roster
//! index.  A firefighter relocated by one assignment is immediately eligible
//! for the next one in the same batch — there is no exclusivity window.
//!
//! This is deliberately not an optimal min-cost matching; the total fleet
//! distance is whatever the greedy per-fire choice produces.

pub mod dispatch;
pub mod error;
pub mod firefighter;


pub use dispatch::{Assignment, FireDispatch, NearestDispatch};
pub use error::{DispatchError, DispatchResult};
pub use firefighter::Firefighter;
