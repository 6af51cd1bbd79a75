//! The dispatch coordinator: roster ownership and the greedy scan.

use fd_city::CityGrid;
use fd_core::{FirefighterId, GridPoint};

use crate::error::{DispatchError, DispatchResult};
use crate::firefighter::Firefighter;

// ── Assignment ────────────────────────────────────────────────────────────────

/// One committed assignment: which firefighter went to which fire, and how
/// far they traveled to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub firefighter: FirefighterId,
    pub fire:        GridPoint,
    pub distance:    u64,
}

// ── FireDispatch ──────────────────────────────────────────────────────────────

/// The dispatch capability consumed by the simulation driver.
///
/// One concrete implementation exists ([`NearestDispatch`]); the trait is the
/// seam for swapping the assignment strategy at compile time.
pub trait FireDispatch {
    /// The ordered roster of all hired firefighters.  `FirefighterId` values
    /// index into this slice.
    fn roster(&self) -> &[Firefighter];

    /// Hire `n` firefighters, each positioned at the fire station.
    ///
    /// Additive across calls — the roster only grows.  `n == 0` is rejected
    /// with [`DispatchError::InvalidHireCount`]; a hire call that does
    /// nothing is always a caller bug, not a request.
    fn hire(&mut self, n: usize) -> DispatchResult<()>;

    /// Dispatch the roster against a batch of burning locations, in input
    /// order, and return the committed assignments.
    ///
    /// An empty roster with a non-empty batch fails up front with
    /// [`DispatchError::NoFirefightersAvailable`] and mutates nothing.
    /// A location that resolves to no building aborts the call at that fire;
    /// assignments committed earlier in the call stay committed (no rollback).
    fn dispatch(
        &mut self,
        city:  &mut CityGrid,
        fires: &[GridPoint],
    ) -> DispatchResult<Vec<Assignment>>;
}

// ── NearestDispatch ───────────────────────────────────────────────────────────

/// Greedy nearest-assignment dispatcher.
///
/// For each fire, a linear scan over the roster picks the firefighter with
/// the minimum taxicab distance, updating only on strict improvement — so
/// ties always go to the lowest roster index.  A firefighter relocated by
/// one assignment competes for the very next fire from its new position.
pub struct NearestDispatch {
    fire_station: GridPoint,
    roster:       Vec<Firefighter>,
}

impl NearestDispatch {
    /// Bind a dispatcher to `city`, capturing the fire-station location as
    /// the shared starting position for every future hire.  The roster
    /// starts empty.
    pub fn new(city: &CityGrid) -> Self {
        Self {
            fire_station: city.fire_station(),
            roster:       Vec::new(),
        }
    }

    /// Nearest roster member to `fire` and its distance.
    ///
    /// Strict `<` keeps the first firefighter at the minimum; callers rely
    /// on this for deterministic tie-breaking.
    ///
    /// # Panics
    /// Debug-asserts a non-empty roster; `dispatch` checks before calling.
    fn nearest(&self, fire: GridPoint) -> (FirefighterId, u64) {
        debug_assert!(!self.roster.is_empty());
        let mut best_index    = 0usize;
        let mut best_distance = self.roster[0].distance_from(fire);
        for (i, firefighter) in self.roster.iter().enumerate().skip(1) {
            let d = firefighter.distance_from(fire);
            if d < best_distance {
                best_index = i;
                best_distance = d;
            }
        }
        (FirefighterId(best_index as u32), best_distance)
    }
}

impl FireDispatch for NearestDispatch {
    fn roster(&self) -> &[Firefighter] {
        &self.roster
    }

    fn hire(&mut self, n: usize) -> DispatchResult<()> {
        if n == 0 {
            return Err(DispatchError::InvalidHireCount(n));
        }
        self.roster
            .extend((0..n).map(|_| Firefighter::new(self.fire_station)));
        Ok(())
    }

    fn dispatch(
        &mut self,
        city:  &mut CityGrid,
        fires: &[GridPoint],
    ) -> DispatchResult<Vec<Assignment>> {
        if self.roster.is_empty() && !fires.is_empty() {
            return Err(DispatchError::NoFirefightersAvailable);
        }

        let mut assignments = Vec::with_capacity(fires.len());
        for &fire in fires {
            let (id, distance) = self.nearest(fire);
            let firefighter = &mut self.roster[id.index()];
            firefighter.add_distance(distance);
            firefighter.set_location(fire);

            // Resolution happens after the movement commits: an unknown
            // location aborts the call with this relocation and all prior
            // assignments left in place.
            let building = city.building_at_mut(fire)?;
            self.roster[id.index()].extinguish(building);

            assignments.push(Assignment {
                firefighter: id,
                fire,
                distance,
            });
        }
        Ok(assignments)
    }
}
