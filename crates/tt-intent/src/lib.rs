//! `tt-intent`: what a unit has committed to doing, and when it lands.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                           |
//! |------------|--------------------------------------------------------------------|
//! | [`action`] | `ActionType`, `ImpactType`, `ActionDefinition`, `ActionLibrary`    |
//! | [`intent`] | `CombatIntent`, `IntentKind`, `MoveStep`, `Reservation`            |
//!
//! # Reservation lifecycle
//!
//! A [`MoveStep`] claims its destination cells when it is created and owns
//! the claim as a [`Reservation`] value.  Releasing consumes that value, so
//! the second release of the same step is unrepresentable: the grid sees
//! exactly one register and exactly one unregister per move.  Dropping a
//! step that still holds its claim is a leak and trips a debug assertion.

pub mod action;
pub mod intent;


pub use action::{ActionDefinition, ActionLibrary, ActionType, ImpactType};
pub use intent::{CombatIntent, IntentKind, MoveStep, Reservation};
