//! `OccupancyGrid`, the spatial authority for blocking and area queries.
//!
//! # Lookup order
//!
//! `is_occupied` consults the occupancy map first and only falls through to
//! the reservation map when the cell has no permanent claim.  A cell whose
//! occupant is the asking unit is therefore free for it even if another unit
//! happens to hold a stale reservation there.
//!
//! # Release ledger
//!
//! In debug builds the grid counts outstanding claims per `(owner, cell)`
//! pair.  Releasing a pair more often than it was reserved panics: a move
//! step's reservation must be released exactly once.  Overlapping claims by
//! the same owner are counted separately, and a pair is forgotten once its
//! count drops to zero.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

use tt_core::{TrianglePoint, UnitId};

/// The two claim maps plus the active-unit registry.
#[derive(Default)]
pub struct OccupancyGrid {
    /// Permanent claims.  `None` marks a static obstacle.
    occupancy: FxHashMap<TrianglePoint, Option<UnitId>>,

    /// Transient claims for in-flight move steps.
    reservations: FxHashMap<TrianglePoint, UnitId>,

    /// Every unit currently on the battlefield, in id order.
    units: BTreeSet<UnitId>,

    #[cfg(debug_assertions)]
    claims: FxHashMap<(UnitId, TrianglePoint), u32>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Unit registry ─────────────────────────────────────────────────────

    pub fn register_unit(&mut self, unit: UnitId) {
        self.units.insert(unit);
    }

    pub fn unregister_unit(&mut self, unit: UnitId) {
        self.units.remove(&unit);
    }

    pub fn contains_unit(&self, unit: UnitId) -> bool {
        self.units.contains(&unit)
    }

    /// All registered units in ascending id order.
    pub fn units(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.iter().copied()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Claim `cells` permanently for `owner` (`None` = static obstacle).
    ///
    /// Last write wins: a cell already held by someone else is taken over.
    /// The takeover is logged because it usually means two footprints
    /// overlap.
    pub fn register_occupancy(&mut self, owner: Option<UnitId>, cells: &[TrianglePoint]) {
        for &cell in cells {
            if let Some(previous) = self.occupancy.insert(cell, owner) {
                if previous != owner {
                    warn!(%cell, ?previous, ?owner, "occupancy overwritten");
                }
            }
        }
    }

    /// Mark `cells` as impassable terrain.
    pub fn register_obstacle(&mut self, cells: &[TrianglePoint]) {
        self.register_occupancy(None, cells);
    }

    /// Drop any permanent claim on `cells`, whoever holds it.
    pub fn unregister_occupancy(&mut self, cells: &[TrianglePoint]) {
        for cell in cells {
            self.occupancy.remove(cell);
        }
    }

    /// The permanent claimant of `cell`: `None` if unclaimed, `Some(None)`
    /// for a static obstacle.
    pub fn occupant(&self, cell: TrianglePoint) -> Option<Option<UnitId>> {
        self.occupancy.get(&cell).copied()
    }

    pub fn occupied_cell_count(&self) -> usize {
        self.occupancy.len()
    }

    // ── Reservation ───────────────────────────────────────────────────────

    /// Claim `cells` transiently for `owner`, replacing any older claim.
    pub fn register_reservation(&mut self, owner: UnitId, cells: &[TrianglePoint]) {
        for &cell in cells {
            self.reservations.insert(cell, owner);
            #[cfg(debug_assertions)]
            {
                *self.claims.entry((owner, cell)).or_default() += 1;
            }
        }
        trace!(%owner, cells = cells.len(), "reservation registered");
    }

    /// Release `owner`'s reservation on `cells`.
    ///
    /// Cells reserved by someone else are left alone, so a stale release
    /// never clobbers a newer claim.
    ///
    /// # Panics
    /// In debug builds, if `owner` releases one of these cells more often
    /// than it reserved it.
    pub fn unregister_reservation(&mut self, owner: UnitId, cells: &[TrianglePoint]) {
        for &cell in cells {
            #[cfg(debug_assertions)]
            {
                let Some(count) = self.claims.get_mut(&(owner, cell)) else {
                    panic!("reservation on {cell} released twice by {owner}");
                };
                *count -= 1;
                if *count == 0 {
                    self.claims.remove(&(owner, cell));
                }
            }
            if self.reservations.get(&cell) == Some(&owner) {
                self.reservations.remove(&cell);
            }
        }
        trace!(%owner, cells = cells.len(), "reservation released");
    }

    /// The unit holding a reservation on `cell`, if any.
    pub fn reservation_owner(&self, cell: TrianglePoint) -> Option<UnitId> {
        self.reservations.get(&cell).copied()
    }

    pub fn reserved_cell_count(&self) -> usize {
        self.reservations.len()
    }

    /// Outstanding `(owner, cell)` pairs in the release ledger.
    #[cfg(debug_assertions)]
    pub(crate) fn ledger_len(&self) -> usize {
        self.claims.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `cell` is claimed by anything other than `ignore`.
    ///
    /// Static obstacles always block.
    pub fn is_occupied(&self, cell: TrianglePoint, ignore: Option<UnitId>) -> bool {
        if let Some(&owner) = self.occupancy.get(&cell) {
            return owner.is_none() || owner != ignore;
        }
        match self.reservations.get(&cell) {
            Some(&holder) => Some(holder) != ignore,
            None => false,
        }
    }

    /// `true` if any of `cells` is occupied per [`is_occupied`](Self::is_occupied).
    pub fn is_space_occupied(&self, cells: &[TrianglePoint], ignore: Option<UnitId>) -> bool {
        cells.iter().any(|&cell| self.is_occupied(cell, ignore))
    }

    /// Distinct units whose permanent footprint overlaps `cells`, excluding
    /// `ignore`.  Reservations and obstacles are not reported.
    pub fn units_in_area(&self, cells: &[TrianglePoint], ignore: Option<UnitId>) -> BTreeSet<UnitId> {
        cells
            .iter()
            .filter_map(|cell| self.occupancy.get(cell).copied().flatten())
            .filter(|&unit| Some(unit) != ignore)
            .collect()
    }

    /// Every claimed cell (either map) not owned by `ignore`.
    ///
    /// Meant for pathfinding collaborators that want an obstacle set rather
    /// than per-cell queries.
    pub fn global_obstacles(&self, ignore: Option<UnitId>) -> FxHashSet<TrianglePoint> {
        let occupied = self
            .occupancy
            .iter()
            .filter(|(_, owner)| owner.is_none() || **owner != ignore)
            .map(|(&cell, _)| cell);
        let reserved = self
            .reservations
            .iter()
            .filter(|(_, holder)| Some(**holder) != ignore)
            .map(|(&cell, _)| cell);
        occupied.chain(reserved).collect()
    }
}
