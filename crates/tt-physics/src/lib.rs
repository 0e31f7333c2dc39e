//! `tt-physics`: turns hits and clash residuals into consequences.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`momentum`] | transfer coefficients, `momentum`                             |
//! | [`impact`]   | `resolve_collision`, `apply_clash_result`, `displace`, reports |
//! | [`feel`]     | presentation feedback derived from a hit                      |
//!
//! # Formulas
//!
//! ```text
//! momentum  p = mass × swiftness × transfer(impact) × force_multiplier
//! velocity  v = p / target.mass
//! damage      = base × (1 − armor / (armor + 100)) + 0.02 p
//! knockdown   v ≥ 1.5 × target.swiftness
//! stagger     v ≥ 1.0 × target.swiftness
//! displaced   v > 0.5 × target.swiftness, distance ⌊v / target.swiftness⌋
//! ```
//!
//! Every constant comes from `CombatConfig`.  The resolver keeps no state.

pub mod feel;
pub mod impact;
pub mod momentum;


pub use impact::{ImpactReport, ImpactStatus, apply_clash_result, displace, resolve_collision};
pub use momentum::{momentum, transfer_coefficient};
