//! `tt-unit`: combatants and the world they stand in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`unit`]    | `CombatUnit` (position, volume, physical stats, status)       |
//! | [`store`]   | `UnitStore` (generation-checked slots)                        |
//! | [`builder`] | `CombatUnitBuilder` (validated construction)                  |
//! | [`world`]   | `World` (units + occupancy grid, kept in sync)                |
//! | [`error`]   | `UnitError`, `UnitResult`                                     |
//!
//! # Validation boundary
//!
//! Every number the impact resolver divides by or multiplies with comes from
//! a unit.  `CombatUnitBuilder::build` rejects non-finite values and
//! non-positive mass or swiftness, so nothing downstream re-checks them.

pub mod builder;
pub mod error;
pub mod store;
pub mod unit;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::CombatUnitBuilder;
pub use error::{UnitError, UnitResult};
pub use store::UnitStore;
pub use unit::CombatUnit;
pub use world::World;
