//! City grid representation and builder.
//!
//! # Data layout
//!
//! Buildings live in a dense `Vec<Building>` indexed by `BuildingId`
//! (registration order).  An `FxHashMap<GridPoint, BuildingId>` provides the
//! exact-location lookup the dispatcher uses to resolve a burning location to
//! its building.  The grid is bounded: every building and the fire station
//! must lie inside `width × height` cells with non-negative coordinates.

use rustc_hash::FxHashMap;

use fd_core::{BuildingId, GridPoint};

use crate::building::Building;
use crate::error::{CityError, CityResult};

// ── CityGrid ──────────────────────────────────────────────────────────────────

/// A bounded city grid: fire station plus building registry.
///
/// Do not construct directly; use [`CityGridBuilder`].
#[derive(Debug)]
pub struct CityGrid {
    width:        u32,
    height:       u32,
    fire_station: GridPoint,

    /// All buildings in registration order.  Indexed by `BuildingId`.
    buildings: Vec<Building>,

    /// Exact-location index into `buildings`.
    by_location: FxHashMap<GridPoint, BuildingId>,
}

impl CityGrid {
    // ── Grid dimensions ───────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `point` lies inside the grid bounds.
    #[inline]
    pub fn in_bounds(&self, point: GridPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    // ── Fire station ──────────────────────────────────────────────────────

    /// Location of the fire station — every firefighter's starting position.
    #[inline]
    pub fn fire_station(&self) -> GridPoint {
        self.fire_station
    }

    // ── Building registry ─────────────────────────────────────────────────

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// All buildings in registration order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Locations of all buildings, in registration order.
    pub fn building_locations(&self) -> Vec<GridPoint> {
        self.buildings.iter().map(Building::location).collect()
    }

    /// Resolve a location to its `BuildingId`.
    pub fn building_id_at(&self, location: GridPoint) -> CityResult<BuildingId> {
        self.by_location
            .get(&location)
            .copied()
            .ok_or(CityError::UnknownLocation(location))
    }

    /// Resolve a location to its building.
    pub fn building_at(&self, location: GridPoint) -> CityResult<&Building> {
        let id = self.building_id_at(location)?;
        Ok(&self.buildings[id.index()])
    }

    /// Resolve a location to its building, mutably (ignite / extinguish).
    pub fn building_at_mut(&mut self, location: GridPoint) -> CityResult<&mut Building> {
        let id = self.building_id_at(location)?;
        Ok(&mut self.buildings[id.index()])
    }

    // ── Fire state ────────────────────────────────────────────────────────

    /// Set the building at `location` burning.
    pub fn ignite(&mut self, location: GridPoint) -> CityResult<()> {
        self.building_at_mut(location)?.ignite();
        Ok(())
    }

    /// Locations of all currently burning buildings, in registration order.
    pub fn burning_locations(&self) -> Vec<GridPoint> {
        self.buildings
            .iter()
            .filter(|b| b.is_burning())
            .map(Building::location)
            .collect()
    }
}

// ── CityGridBuilder ───────────────────────────────────────────────────────────

/// Construct a [`CityGrid`] incrementally, then call [`build`](Self::build).
///
/// Buildings may be added in any order; `build()` validates bounds,
/// duplicates, and fire-station placement in one pass.
///
/// # Example
///
/// ```
/// use fd_city::CityGridBuilder;
/// use fd_core::GridPoint;
///
/// let mut b = CityGridBuilder::new(10, 10);
/// b.fire_station(GridPoint::new(0, 0));
/// b.add_building(GridPoint::new(3, 0));
/// b.add_building(GridPoint::new(0, 4));
/// let city = b.build().unwrap();
/// assert_eq!(city.building_count(), 2);
/// ```
pub struct CityGridBuilder {
    width:        u32,
    height:       u32,
    fire_station: Option<GridPoint>,
    locations:    Vec<GridPoint>,
}

impl CityGridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fire_station: None,
            locations:    Vec::new(),
        }
    }

    /// Place the fire station.  A later call replaces an earlier one.
    pub fn fire_station(&mut self, point: GridPoint) {
        self.fire_station = Some(point);
    }

    /// Register a building and return its `BuildingId` (sequential from 0).
    ///
    /// Validation is deferred to `build()`.
    pub fn add_building(&mut self, point: GridPoint) -> BuildingId {
        let id = BuildingId(self.locations.len() as u32);
        self.locations.push(point);
        id
    }

    pub fn building_count(&self) -> usize {
        self.locations.len()
    }

    /// Consume the builder and produce a validated [`CityGrid`].
    pub fn build(self) -> CityResult<CityGrid> {
        let in_bounds = |point: GridPoint| {
            point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
        };

        let fire_station = self.fire_station.ok_or(CityError::NoFireStation)?;
        if !in_bounds(fire_station) {
            return Err(CityError::OutOfBounds {
                point:  fire_station,
                width:  self.width,
                height: self.height,
            });
        }

        let mut buildings = Vec::with_capacity(self.locations.len());
        let mut by_location =
            FxHashMap::with_capacity_and_hasher(self.locations.len(), Default::default());

        for (i, &point) in self.locations.iter().enumerate() {
            if !in_bounds(point) {
                return Err(CityError::OutOfBounds {
                    point,
                    width:  self.width,
                    height: self.height,
                });
            }
            if by_location.insert(point, BuildingId(i as u32)).is_some() {
                return Err(CityError::DuplicateBuilding(point));
            }
            buildings.push(Building::new(point));
        }

        Ok(CityGrid {
            width: self.width,
            height: self.height,
            fire_station,
            buildings,
            by_location,
        })
    }
}
