//! `CombatUnit`: one combatant's spatial, physical and status state.

use tt_core::{GridDirection, GridPoint, TrianglePoint};
use tt_grid::Shape;

/// A combatant on the lattice.
///
/// Construct through [`CombatUnitBuilder`](crate::CombatUnitBuilder); the
/// builder guarantees `mass` and `swiftness` are positive and finite and
/// `armor` is finite and non-negative.  The fields are public so the
/// resolver and tests can read and mutate status directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatUnit {
    pub name: String,

    // ── Spatial ───────────────────────────────────────────────────────────
    /// Anchor vertex.  The footprint is `volume` placed here.
    pub position: GridPoint,
    pub facing:   GridDirection,
    pub volume:   Shape,

    // ── Physical ──────────────────────────────────────────────────────────
    pub mass:      f32,
    /// Speed.  Also the yardstick for the stagger/knockdown thresholds.
    pub swiftness: f32,
    pub armor:     f32,

    // ── Resources ─────────────────────────────────────────────────────────
    pub health:     f32,
    /// Unbounded; +1 per won or survived interaction.
    pub focus:      u32,
    /// Clamped to the configured resource cap.
    pub adrenaline: f32,

    // ── Status ────────────────────────────────────────────────────────────
    pub knocked_down: bool,
    pub staggered:    bool,
}

impl CombatUnit {
    /// Cells this unit currently covers.
    pub fn footprint(&self) -> Vec<TrianglePoint> {
        self.volume.cells_at(self.position, self.facing)
    }

    /// Cells this unit would cover standing at `position` with its current
    /// facing.
    pub fn footprint_at(&self, position: GridPoint) -> Vec<TrianglePoint> {
        self.volume.cells_at(position, self.facing)
    }

    #[inline]
    pub fn gain_focus(&mut self) {
        self.focus += 1;
    }

    /// Add `amount` adrenaline, saturating at `cap`.
    #[inline]
    pub fn gain_adrenaline(&mut self, amount: f32, cap: f32) {
        self.adrenaline = (self.adrenaline + amount).min(cap);
    }

    /// Subtract `amount` health, flooring at zero.
    #[inline]
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
