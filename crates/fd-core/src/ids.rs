//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs are plain indices into dense storage: `FirefighterId` indexes the
//! dispatch roster, `BuildingId` the city's building registry.  Both are
//! `Copy + Ord + Hash` so they can be used as map keys and sorted without
//! ceremony.  The inner integer is `pub` for direct `Vec` indexing via
//! `id.0 as usize`, but callers should prefer the `.index()` helper.

use std::fmt;

/// Generate a typed index wrapper around `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a firefighter in the dispatch roster.  Assigned in hire
    /// order, starting at 0; never reused (there is no retire operation).
    pub struct FirefighterId;
}

typed_id! {
    /// Index of a building in the city registry.  Assigned in registration
    /// order by `CityGridBuilder`.
    pub struct BuildingId;
}
