//! `tt-core`: foundational types for the `tri_tactics` combat core.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`ids`]       | `UnitId` (generation-checked), `IntentId`, `GroupId`       |
//! | [`geometry`]  | `TrianglePoint`, `GridPoint`, `GridDirection`              |
//! | [`time`]      | `Tick`, tick-rate constants, delay rounding                |
//! | [`event`]     | `InteractionKind`, `Feedback`, `StatusLabel`               |
//! | [`observer`]  | `CombatObserver` trait, `NoopObserver`                     |
//! | [`config`]    | `CombatConfig` (physics coefficients, slow motion, caps)   |
//! | [`error`]     | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value types and config.  |

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod ids;
pub mod observer;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CombatConfig;
pub use error::{CoreError, CoreResult};
pub use event::{Feedback, InteractionKind, StatusLabel};
pub use geometry::{GridDirection, GridPoint, TrianglePoint};
pub use ids::{GroupId, IntentId, UnitId};
pub use observer::{CombatObserver, NoopObserver};
pub use time::{SECONDS_PER_TICK, TICKS_PER_SECOND, Tick, delay_to_ticks};
