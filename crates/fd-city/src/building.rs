//! Per-building state.

use fd_core::GridPoint;

/// One building on the city grid.
///
/// A building is either **intact** (`burning = false`) or **burning**.
/// `ignite` and `extinguish` are both idempotent: re-igniting a burning
/// building or extinguishing an intact one is a no-op, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    location: GridPoint,
    burning:  bool,
}

impl Building {
    /// Construct an intact building at `location`.
    ///
    /// Buildings are created only through `CityGridBuilder`, which owns
    /// bounds and duplicate validation.
    pub(crate) fn new(location: GridPoint) -> Self {
        Self { location, burning: false }
    }

    #[inline]
    pub fn location(&self) -> GridPoint {
        self.location
    }

    #[inline]
    pub fn is_burning(&self) -> bool {
        self.burning
    }

    /// Mark the building as burning.
    #[inline]
    pub fn ignite(&mut self) {
        self.burning = true;
    }

    /// Put the fire out.  Safe to call on an intact building.
    #[inline]
    pub fn extinguish(&mut self) {
        self.burning = false;
    }
}
