//! Combat intents: a pending action with an owner and a cancellation flag.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use tt_core::{GridPoint, TrianglePoint, UnitId};
use tt_grid::OccupancyGrid;
use tt_unit::World;

use crate::{ActionDefinition, ActionType};

// ── Reservation ───────────────────────────────────────────────────────────────

/// A live claim on destination cells in the reservation map.
///
/// Not `Clone`.  [`release`](Self::release) consumes the value, so one
/// reservation maps to one unregister call.
#[derive(Debug)]
pub struct Reservation {
    owner: UnitId,
    cells: Vec<TrianglePoint>,
    held:  bool,
}

impl Reservation {
    /// Register `cells` for `owner` and return the guard.
    pub fn acquire(grid: &mut OccupancyGrid, owner: UnitId, cells: Vec<TrianglePoint>) -> Self {
        grid.register_reservation(owner, &cells);
        Self { owner, cells, held: true }
    }

    /// Give the cells back to the grid.
    pub fn release(mut self, grid: &mut OccupancyGrid) {
        grid.unregister_reservation(self.owner, &self.cells);
        self.held = false;
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn cells(&self) -> &[TrianglePoint] {
        &self.cells
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        debug_assert!(
            !self.held || std::thread::panicking(),
            "reservation held by {} leaked",
            self.owner
        );
    }
}

// ── MoveStep ──────────────────────────────────────────────────────────────────

/// One step of movement from one vertex to another.
///
/// Both footprints are captured at creation so the arbiter can test an
/// attack area against origin and destination without consulting the unit.
#[derive(Debug)]
pub struct MoveStep {
    pub from:       GridPoint,
    pub to:         GridPoint,
    pub from_cells: Vec<TrianglePoint>,
    pub to_cells:   Vec<TrianglePoint>,
    reservation:    Option<Reservation>,
}

impl MoveStep {
    /// Create a step and reserve `to_cells` for `owner`.
    pub fn reserve(
        grid:       &mut OccupancyGrid,
        owner:      UnitId,
        from:       GridPoint,
        to:         GridPoint,
        from_cells: Vec<TrianglePoint>,
        to_cells:   Vec<TrianglePoint>,
    ) -> Self {
        let reservation = Reservation::acquire(grid, owner, to_cells.clone());
        trace!(%owner, %from, %to, "move step reserved");
        Self { from, to, from_cells, to_cells, reservation: Some(reservation) }
    }

    /// Plan a step for `owner` from where it stands to `to`, deriving both
    /// footprints from its volume and facing.  `None` for a stale handle.
    pub fn plan(world: &mut World, owner: UnitId, to: GridPoint) -> Option<Self> {
        let unit = world.units.get(owner)?;
        let from = unit.position;
        let from_cells = unit.footprint();
        let to_cells = unit.footprint_at(to);
        Some(Self::reserve(&mut world.grid, owner, from, to, from_cells, to_cells))
    }

    /// `true` until the reservation has been released.
    pub fn is_reserved(&self) -> bool {
        self.reservation.is_some()
    }

    /// Release the reservation if still held.  Returns `false` when there
    /// was nothing left to release.
    pub fn release(&mut self, grid: &mut OccupancyGrid) -> bool {
        match self.reservation.take() {
            Some(reservation) => {
                reservation.release(grid);
                true
            }
            None => false,
        }
    }
}

// ── CombatIntent ──────────────────────────────────────────────────────────────

/// Variant payload of a [`CombatIntent`].
#[derive(Debug)]
pub enum IntentKind {
    Attack { action: Arc<ActionDefinition> },
    /// Scoped to the owner's current position and facing.
    Block,
    /// Scoped to the owner's current position and facing.
    Dodge,
    MoveStep(MoveStep),
}

impl IntentKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            IntentKind::Attack { .. } => ActionType::Attack,
            IntentKind::Block         => ActionType::Block,
            IntentKind::Dodge         => ActionType::Dodge,
            IntentKind::MoveStep(_)   => ActionType::Move,
        }
    }
}

/// A pending action owned by a unit.
///
/// The owner is a handle, not a reference: if the unit is gone by the time
/// the intent fires, the intent is treated as cancelled.
#[derive(Debug)]
pub struct CombatIntent {
    pub owner: UnitId,
    pub kind:  IntentKind,
    cancelled: bool,
}

impl CombatIntent {
    pub fn new(owner: UnitId, kind: IntentKind) -> Self {
        Self { owner, kind, cancelled: false }
    }

    pub fn attack(owner: UnitId, action: Arc<ActionDefinition>) -> Self {
        Self::new(owner, IntentKind::Attack { action })
    }

    pub fn block(owner: UnitId) -> Self {
        Self::new(owner, IntentKind::Block)
    }

    pub fn dodge(owner: UnitId) -> Self {
        Self::new(owner, IntentKind::Dodge)
    }

    pub fn move_step(owner: UnitId, step: MoveStep) -> Self {
        Self::new(owner, IntentKind::MoveStep(step))
    }

    #[inline]
    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Mark cancelled and release a move step's reservation.  Idempotent.
    pub fn cancel(&mut self, grid: &mut OccupancyGrid) {
        self.cancelled = true;
        self.release_reservation(grid);
    }

    /// Release a held move-step reservation without cancelling.  Returns
    /// `true` if something was released.
    pub fn release_reservation(&mut self, grid: &mut OccupancyGrid) -> bool {
        match &mut self.kind {
            IntentKind::MoveStep(step) => step.release(grid),
            _ => false,
        }
    }

    pub fn attack_action(&self) -> Option<&Arc<ActionDefinition>> {
        match &self.kind {
            IntentKind::Attack { action } => Some(action),
            _ => None,
        }
    }

    pub fn as_move_step(&self) -> Option<&MoveStep> {
        match &self.kind {
            IntentKind::MoveStep(step) => Some(step),
            _ => None,
        }
    }
}

/// Short label such as `QuickSlash by UnitId(3v0)`.
impl fmt::Display for CombatIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IntentKind::Attack { action } => write!(f, "{} by {}", action.id, self.owner),
            IntentKind::Block             => write!(f, "Block by {}", self.owner),
            IntentKind::Dodge             => write!(f, "Dodge by {}", self.owner),
            IntentKind::MoveStep(step)    => {
                write!(f, "Move {} -> {} by {}", step.from, step.to, self.owner)
            }
        }
    }
}
