//! Fluent, validating builder for [`CombatUnit`].
//!
//! # Usage
//!
//! ```rust
//! use tt_core::{GridDirection, GridPoint};
//! use tt_unit::CombatUnitBuilder;
//!
//! let knight = CombatUnitBuilder::new("knight", GridPoint::new(0, 0))
//!     .facing(GridDirection::East)
//!     .mass(12.0)
//!     .swiftness(4.0)
//!     .armor(30.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(knight.footprint().len(), 6);
//! ```

use tt_core::{GridDirection, GridPoint};
use tt_grid::Shape;

use crate::{CombatUnit, UnitError, UnitResult};

/// Builder for [`CombatUnit`].
///
/// Defaults: facing east, hexagon volume, mass 10, swiftness 5, armor 0,
/// health 100, all resources and status flags cleared.
pub struct CombatUnitBuilder {
    name:      String,
    position:  GridPoint,
    facing:    GridDirection,
    volume:    Shape,
    mass:      f32,
    swiftness: f32,
    armor:     f32,
    health:    f32,
}

impl CombatUnitBuilder {
    pub fn new(name: impl Into<String>, position: GridPoint) -> Self {
        Self {
            name:      name.into(),
            position,
            facing:    GridDirection::East,
            volume:    Shape::hexagon(),
            mass:      10.0,
            swiftness: 5.0,
            armor:     0.0,
            health:    100.0,
        }
    }

    pub fn facing(mut self, facing: GridDirection) -> Self {
        self.facing = facing;
        self
    }

    /// Relative footprint.  Defaults to [`Shape::hexagon`].
    pub fn volume(mut self, volume: Shape) -> Self {
        self.volume = volume;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn swiftness(mut self, swiftness: f32) -> Self {
        self.swiftness = swiftness;
        self
    }

    pub fn armor(mut self, armor: f32) -> Self {
        self.armor = armor;
        self
    }

    pub fn health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    /// Validate the attributes and produce the unit.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAttribute`] for non-finite stats, non-positive
    ///   mass/swiftness, or negative armor/health.
    /// - [`UnitError::InvalidPosition`] if `position` is not a vertex.
    /// - [`UnitError::EmptyVolume`] if the volume table for the chosen facing
    ///   is empty.
    pub fn build(self) -> UnitResult<CombatUnit> {
        positive("mass", self.mass)?;
        positive("swiftness", self.swiftness)?;
        non_negative("armor", self.armor)?;
        non_negative("health", self.health)?;

        if !self.position.is_valid() {
            return Err(UnitError::InvalidPosition(self.position));
        }
        if self.volume.cells_at(self.position, self.facing).is_empty() {
            return Err(UnitError::EmptyVolume);
        }

        Ok(CombatUnit {
            name:         self.name,
            position:     self.position,
            facing:       self.facing,
            volume:       self.volume,
            mass:         self.mass,
            swiftness:    self.swiftness,
            armor:        self.armor,
            health:       self.health,
            focus:        0,
            adrenaline:   0.0,
            knocked_down: false,
            staggered:    false,
        })
    }
}

fn positive(field: &'static str, value: f32) -> UnitResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(UnitError::InvalidAttribute { field, expected: "positive and finite", value })
    }
}

fn non_negative(field: &'static str, value: f32) -> UnitResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(UnitError::InvalidAttribute { field, expected: "non-negative and finite", value })
    }
}
