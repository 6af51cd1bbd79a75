//! Unit tests for fd-city.

use fd_core::GridPoint;

use crate::{CityError, CityGrid, CityGridBuilder};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

/// 10×10 city, station at the origin, buildings at (3,0), (0,4), (5,5).
fn small_city() -> CityGrid {
    let mut b = CityGridBuilder::new(10, 10);
    b.fire_station(p(0, 0));
    b.add_building(p(3, 0));
    b.add_building(p(0, 4));
    b.add_building(p(5, 5));
    b.build().unwrap()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_sequential_ids() {
        let mut b = CityGridBuilder::new(4, 4);
        b.fire_station(p(0, 0));
        let id0 = b.add_building(p(1, 1));
        let id1 = b.add_building(p(2, 2));
        assert_eq!(id0.index(), 0);
        assert_eq!(id1.index(), 1);
        let city = b.build().unwrap();
        assert_eq!(city.building_count(), 2);
        assert_eq!(city.buildings()[0].location(), p(1, 1));
    }

    #[test]
    fn missing_fire_station_errors() {
        let b = CityGridBuilder::new(4, 4);
        assert!(matches!(b.build(), Err(CityError::NoFireStation)));
    }

    #[test]
    fn fire_station_out_of_bounds_errors() {
        let mut b = CityGridBuilder::new(4, 4);
        b.fire_station(p(4, 0));
        assert!(matches!(b.build(), Err(CityError::OutOfBounds { .. })));
    }

    #[test]
    fn negative_building_coordinate_errors() {
        let mut b = CityGridBuilder::new(4, 4);
        b.fire_station(p(0, 0));
        b.add_building(p(-1, 2));
        assert!(matches!(b.build(), Err(CityError::OutOfBounds { .. })));
    }

    #[test]
    fn duplicate_building_errors() {
        let mut b = CityGridBuilder::new(4, 4);
        b.fire_station(p(0, 0));
        b.add_building(p(2, 2));
        b.add_building(p(2, 2));
        match b.build() {
            Err(CityError::DuplicateBuilding(point)) => assert_eq!(point, p(2, 2)),
            other => panic!("expected DuplicateBuilding, got {other:?}"),
        }
    }

    #[test]
    fn later_fire_station_call_wins() {
        let mut b = CityGridBuilder::new(4, 4);
        b.fire_station(p(0, 0));
        b.fire_station(p(3, 3));
        let city = b.build().unwrap();
        assert_eq!(city.fire_station(), p(3, 3));
    }
}

#[cfg(test)]
mod lookup {
    use super::*;

    #[test]
    fn building_at_known_location() {
        let city = small_city();
        assert_eq!(city.building_at(p(3, 0)).unwrap().location(), p(3, 0));
    }

    #[test]
    fn building_at_unknown_location_errors() {
        let city = small_city();
        match city.building_at(p(9, 9)) {
            Err(CityError::UnknownLocation(point)) => assert_eq!(point, p(9, 9)),
            other => panic!("expected UnknownLocation, got {other:?}"),
        }
    }

    #[test]
    fn in_bounds_edges() {
        let city = small_city();
        assert!(city.in_bounds(p(0, 0)));
        assert!(city.in_bounds(p(9, 9)));
        assert!(!city.in_bounds(p(10, 0)));
        assert!(!city.in_bounds(p(0, -1)));
    }

    #[test]
    fn building_locations_in_registration_order() {
        let city = small_city();
        assert_eq!(city.building_locations(), vec![p(3, 0), p(0, 4), p(5, 5)]);
    }
}

#[cfg(test)]
mod fire_state {
    use super::*;

    #[test]
    fn ignite_then_extinguish() {
        let mut city = small_city();
        city.ignite(p(3, 0)).unwrap();
        assert!(city.building_at(p(3, 0)).unwrap().is_burning());

        city.building_at_mut(p(3, 0)).unwrap().extinguish();
        assert!(!city.building_at(p(3, 0)).unwrap().is_burning());
    }

    #[test]
    fn extinguish_is_idempotent() {
        let mut city = small_city();
        let building = city.building_at_mut(p(0, 4)).unwrap();
        building.extinguish();
        building.extinguish(); // intact building; still a no-op
        assert!(!building.is_burning());
    }

    #[test]
    fn ignite_unknown_location_errors() {
        let mut city = small_city();
        assert!(matches!(
            city.ignite(p(1, 1)),
            Err(CityError::UnknownLocation(_))
        ));
    }

    #[test]
    fn burning_locations_in_registration_order() {
        let mut city = small_city();
        city.ignite(p(5, 5)).unwrap();
        city.ignite(p(3, 0)).unwrap();
        // Registration order, not ignition order.
        assert_eq!(city.burning_locations(), vec![p(3, 0), p(5, 5)]);
    }
}
