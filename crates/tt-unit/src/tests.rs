//! Unit tests for tt-unit.

#[cfg(test)]
mod builder {
    use tt_core::{GridDirection, GridPoint};
    use tt_grid::Shape;

    use crate::{CombatUnitBuilder, UnitError};

    #[test]
    fn defaults() {
        let unit = CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap();
        assert_eq!(unit.mass, 10.0);
        assert_eq!(unit.swiftness, 5.0);
        assert_eq!(unit.armor, 0.0);
        assert_eq!(unit.health, 100.0);
        assert_eq!(unit.facing, GridDirection::East);
        assert_eq!(unit.focus, 0);
        assert!(!unit.knocked_down && !unit.staggered);
        assert_eq!(unit.footprint().len(), 6);
    }

    #[test]
    fn zero_mass_rejected() {
        let err = CombatUnitBuilder::new("a", GridPoint::ORIGIN).mass(0.0).build().unwrap_err();
        assert!(matches!(err, UnitError::InvalidAttribute { field: "mass", .. }));
    }

    #[test]
    fn nan_swiftness_rejected() {
        let err = CombatUnitBuilder::new("a", GridPoint::ORIGIN)
            .swiftness(f32::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidAttribute { field: "swiftness", .. }));
    }

    #[test]
    fn negative_armor_rejected() {
        let err = CombatUnitBuilder::new("a", GridPoint::ORIGIN).armor(-1.0).build().unwrap_err();
        assert!(matches!(err, UnitError::InvalidAttribute { field: "armor", .. }));
    }

    #[test]
    fn off_lattice_position_rejected() {
        let err = CombatUnitBuilder::new("a", GridPoint::new(1, 0)).build().unwrap_err();
        assert!(matches!(err, UnitError::InvalidPosition(_)));
    }

    #[test]
    fn empty_volume_rejected() {
        let err = CombatUnitBuilder::new("a", GridPoint::ORIGIN)
            .volume(Shape::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, UnitError::EmptyVolume));
    }
}

#[cfg(test)]
mod unit {
    use tt_core::GridPoint;

    use crate::CombatUnitBuilder;

    #[test]
    fn adrenaline_saturates() {
        let mut unit = CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap();
        unit.gain_adrenaline(60.0, 100.0);
        unit.gain_adrenaline(60.0, 100.0);
        assert_eq!(unit.adrenaline, 100.0);
    }

    #[test]
    fn health_floors_at_zero() {
        let mut unit = CombatUnitBuilder::new("a", GridPoint::ORIGIN).health(10.0).build().unwrap();
        unit.take_damage(4.0);
        assert_eq!(unit.health, 6.0);
        unit.take_damage(50.0);
        assert_eq!(unit.health, 0.0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn focus_is_unbounded() {
        let mut unit = CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap();
        for _ in 0..500 {
            unit.gain_focus();
        }
        assert_eq!(unit.focus, 500);
    }
}

#[cfg(test)]
mod store {
    use tt_core::GridPoint;

    use crate::{CombatUnit, CombatUnitBuilder, UnitStore};

    fn unit(name: &str) -> CombatUnit {
        CombatUnitBuilder::new(name, GridPoint::ORIGIN).build().unwrap()
    }

    #[test]
    fn insert_get_remove() {
        let mut store = UnitStore::new();
        let a = store.insert(unit("a"));
        let b = store.insert(unit("b"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a).unwrap().name, "a");
        assert_eq!(store.remove(b).unwrap().name, "b");
        assert!(store.get(b).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_handle_never_resolves() {
        let mut store = UnitStore::new();
        let old = store.insert(unit("old"));
        store.remove(old);
        let new = store.insert(unit("new"));
        assert_eq!(new.index, old.index);
        assert_ne!(new.generation, old.generation);
        assert!(store.get(old).is_none());
        assert!(store.remove(old).is_none());
        assert_eq!(store.get(new).unwrap().name, "new");
    }

    #[test]
    fn pair_mut_preserves_argument_order() {
        let mut store = UnitStore::new();
        let a = store.insert(unit("a"));
        let b = store.insert(unit("b"));
        let (x, y) = store.get_pair_mut(b, a).unwrap();
        assert_eq!(x.name, "b");
        assert_eq!(y.name, "a");
        x.focus = 3;
        assert_eq!(store.get(b).unwrap().focus, 3);
        assert!(store.get_pair_mut(a, a).is_none());
    }

    #[test]
    fn iteration_is_in_slot_order() {
        let mut store = UnitStore::new();
        let a = store.insert(unit("a"));
        let b = store.insert(unit("b"));
        let c = store.insert(unit("c"));
        store.remove(b);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, c]);
    }
}

#[cfg(test)]
mod world {
    use tt_core::{GridDirection, GridPoint, TrianglePoint};
    use tt_grid::Shape;

    use crate::{CombatUnitBuilder, World};

    #[test]
    fn spawn_claims_footprint() {
        let mut world = World::new();
        let a = world.spawn(CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap());
        assert!(world.grid.contains_unit(a));
        assert_eq!(world.grid.occupied_cell_count(), 6);
        for cell in world.footprint(a).unwrap() {
            assert_eq!(world.grid.occupant(cell), Some(Some(a)));
        }
    }

    #[test]
    fn relocate_moves_occupancy() {
        let mut world = World::new();
        let a = world.spawn(CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap());
        assert!(world.relocate(a, GridPoint::new(4, 0)));
        assert_eq!(world.unit(a).unwrap().position, GridPoint::new(4, 0));
        assert_eq!(world.grid.occupied_cell_count(), 6);
        assert!(!world.grid.is_occupied(TrianglePoint::new(1, 0, 1), None));
        assert!(world.grid.is_occupied(TrianglePoint::new(5, 0, 1), None));
    }

    #[test]
    fn overlapping_relocate_keeps_shared_cells() {
        let mut world = World::new();
        let a = world.spawn(CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap());
        // One vertex east: the hexagons share two triangles.
        world.relocate(a, GridPoint::new(2, 0));
        let footprint = world.footprint(a).unwrap();
        assert_eq!(world.grid.occupied_cell_count(), footprint.len());
        assert!(footprint.iter().all(|&c| world.grid.occupant(c) == Some(Some(a))));
    }

    #[test]
    fn turn_reregisters_asymmetric_volume() {
        let mut world = World::new();
        let wedge = Shape::uniform(vec![TrianglePoint::new(1, 0, 1)]);
        let a = world.spawn(
            CombatUnitBuilder::new("a", GridPoint::ORIGIN).volume(wedge).build().unwrap(),
        );
        assert!(world.turn(a, GridDirection::NorthEast));
        assert_eq!(world.grid.occupant(TrianglePoint::new(1, 0, 1)), None);
        assert_eq!(world.grid.occupant(TrianglePoint::new(0, 1, -1)), Some(Some(a)));
    }

    #[test]
    fn despawn_releases_only_own_cells() {
        let mut world = World::new();
        let a = world.spawn(CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap());
        // b overwrites two of a's cells.
        let b = world.spawn(CombatUnitBuilder::new("b", GridPoint::new(2, 0)).build().unwrap());
        world.despawn(a).unwrap();
        assert!(!world.grid.contains_unit(a));
        assert!(world.unit(a).is_none());
        assert_eq!(world.grid.occupied_cell_count(), 6);
        for cell in world.footprint(b).unwrap() {
            assert_eq!(world.grid.occupant(cell), Some(Some(b)));
        }
    }

    #[test]
    fn stale_handles_are_rejected() {
        let mut world = World::new();
        let a = world.spawn(CombatUnitBuilder::new("a", GridPoint::ORIGIN).build().unwrap());
        world.despawn(a);
        assert!(!world.relocate(a, GridPoint::new(2, 0)));
        assert!(!world.turn(a, GridDirection::West));
        assert!(world.despawn(a).is_none());
    }
}
