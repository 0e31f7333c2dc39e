//! `tt-arbiter`: settles conflicts between intents due on the same tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`classify`] | `Pairing`, `classify`, attack-area targeting               |
//! | [`resolve`]  | `resolve`, `Interaction`, `ArbiterReport`, `SlowMotionRequest` |
//!
//! # Pass structure
//!
//! One pass over the upper triangle of the pair matrix.  A pair is skipped
//! if either intent is cancelled or already took part in an interaction
//! earlier in the pass, so each intent is resolved at most once per tick and
//! the first matching pair wins.
//!
//! | Pair              | Condition                                   | Outcome     |
//! |-------------------|---------------------------------------------|-------------|
//! | Attack × Attack   | each area holds the other's owner           | `Clash`     |
//! | Attack × Block    | area holds the blocker                      | `Parry`     |
//! | Attack × Dodge    | area holds the dodger                       | `Dodge`     |
//! | Attack × MoveStep | area overlaps the destination footprint     | `Intercept` |
//! | Attack × MoveStep | area overlaps only the origin footprint     | `Escape`    |
//!
//! Classification and effects are symmetric in pair order.

pub mod classify;
pub mod resolve;


pub use classify::{Pairing, classify, is_targeting};
pub use resolve::{ArbiterReport, Interaction, SlowMotionRequest, resolve};
