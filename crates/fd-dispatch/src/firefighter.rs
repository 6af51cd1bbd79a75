//! Per-firefighter state.

use fd_city::Building;
use fd_core::GridPoint;

/// One dispatchable firefighter.
///
/// Two mutable fields, both written only by the dispatch coordinator:
/// `location` changes when an assignment relocates the firefighter, and
/// `distance_traveled` accumulates the taxicab cost of every assignment.
/// Relocation and distance accounting are independent, explicitly invoked
/// steps — `set_location` never touches the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Firefighter {
    location:          GridPoint,
    distance_traveled: u64,
}

impl Firefighter {
    /// A fresh hire at `location` (the fire station) with zero distance
    /// traveled.
    pub fn new(location: GridPoint) -> Self {
        Self {
            location,
            distance_traveled: 0,
        }
    }

    #[inline]
    pub fn location(&self) -> GridPoint {
        self.location
    }

    /// Relocate the firefighter.  No distance accounting happens here;
    /// callers add the travel cost separately via [`add_distance`](Self::add_distance).
    #[inline]
    pub fn set_location(&mut self, new_location: GridPoint) {
        self.location = new_location;
    }

    /// Total distance traveled since hiring.  Monotonically non-decreasing.
    #[inline]
    pub fn distance_traveled(&self) -> u64 {
        self.distance_traveled
    }

    /// Accumulate `delta` onto the running total.
    ///
    /// Always adds, never assigns.  The unsigned parameter makes
    /// non-negativity a type guarantee: taxicab results are the only values
    /// callers feed in, and the total can never decrease.
    #[inline]
    pub fn add_distance(&mut self, delta: u64) {
        self.distance_traveled += delta;
    }

    /// Taxicab distance from this firefighter's position to `other`.
    #[inline]
    pub fn distance_from(&self, other: GridPoint) -> u64 {
        self.location.taxicab_distance(other)
    }

    /// Put out the fire in `building`.
    ///
    /// Delegates to the building's own extinguish capability; firefighter
    /// state is untouched.
    pub fn extinguish(&self, building: &mut Building) {
        building.extinguish();
    }
}
