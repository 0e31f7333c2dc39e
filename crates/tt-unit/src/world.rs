//! `World`: the explicit battlefield state shared by timeline, arbiter and
//! resolver.
//!
//! `World` keeps the unit store and the occupancy grid consistent: a unit's
//! registered occupancy always equals its current footprint.  Mutate unit
//! position or facing only through [`relocate`](World::relocate) and
//! [`turn`](World::turn), never by writing the fields directly.

use tracing::debug;

use tt_core::{GridDirection, GridPoint, TrianglePoint, UnitId};
use tt_grid::OccupancyGrid;

use crate::{CombatUnit, UnitStore};

#[derive(Default)]
pub struct World {
    pub units: UnitStore,
    pub grid:  OccupancyGrid,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store and register `unit`, then claim its footprint.
    pub fn spawn(&mut self, unit: CombatUnit) -> UnitId {
        let cells = unit.footprint();
        let name = unit.name.clone();
        let id = self.units.insert(unit);
        self.grid.register_unit(id);
        self.grid.register_occupancy(Some(id), &cells);
        debug!(%id, %name, cells = cells.len(), "unit spawned");
        id
    }

    /// Remove a unit and every occupancy cell it still holds.
    ///
    /// Reservations are not touched; cancel the unit's pending intents on the
    /// timeline first so their move steps release what they hold.
    pub fn despawn(&mut self, id: UnitId) -> Option<CombatUnit> {
        let unit = self.units.remove(id)?;
        release_owned(&mut self.grid, id, &unit.footprint());
        self.grid.unregister_unit(id);
        debug!(%id, name = %unit.name, "unit despawned");
        Some(unit)
    }

    /// Move `id` to `to`, swapping its occupancy in one step.  Blocking is
    /// the caller's concern.  Returns `false` for a stale handle.
    pub fn relocate(&mut self, id: UnitId, to: GridPoint) -> bool {
        let Some(unit) = self.units.get_mut(id) else {
            return false;
        };
        let old = unit.footprint();
        unit.position = to;
        let new = unit.footprint();
        release_owned(&mut self.grid, id, &old);
        self.grid.register_occupancy(Some(id), &new);
        true
    }

    /// Change the facing of `id`, re-registering its (possibly asymmetric)
    /// volume.  Returns `false` for a stale handle.
    pub fn turn(&mut self, id: UnitId, facing: GridDirection) -> bool {
        let Some(unit) = self.units.get_mut(id) else {
            return false;
        };
        let old = unit.footprint();
        unit.facing = facing;
        let new = unit.footprint();
        release_owned(&mut self.grid, id, &old);
        self.grid.register_occupancy(Some(id), &new);
        true
    }

    #[inline]
    pub fn unit(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units.get(id)
    }

    #[inline]
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.units.get_mut(id)
    }

    /// Current footprint of `id`, or `None` for a stale handle.
    pub fn footprint(&self, id: UnitId) -> Option<Vec<TrianglePoint>> {
        self.units.get(id).map(CombatUnit::footprint)
    }
}

/// Unregister those of `cells` still claimed by `owner`.  Cells another unit
/// took over (last write wins) stay with their new owner.
fn release_owned(grid: &mut OccupancyGrid, owner: UnitId, cells: &[TrianglePoint]) {
    let owned: Vec<TrianglePoint> = cells
        .iter()
        .copied()
        .filter(|&cell| grid.occupant(cell) == Some(Some(owner)))
        .collect();
    grid.unregister_occupancy(&owned);
}
