//! `tt-timeline`: fixed-step battle clock for the tri_tactics combat core.
//!
//! # Tick loop
//!
//! ```text
//! advance_time(delta):
//!   accumulator += delta * 60
//!   while accumulator ≥ 1 tick:
//!     ① Drain    : every pending intent due at or before the current tick,
//!                  in (tick ↑, priority ↓, submission ↑) order.
//!     ② Validate : intents whose owner is gone are cancelled.
//!     ③ Arbitrate: pairwise Clash / Parry / Dodge / Intercept / Escape.
//!     ④ Execute  : survivors run through the IntentExecutor.
//!     current_tick += 1
//! ```
//!
//! Two runs fed the same total time in different chunk sizes process the
//! same ticks and fire the same intents in the same order.
//!
//! # Modules
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`queue`]      | `IntentQueue`, `ScheduledIntent`, options        |
//! | [`executor`]   | `IntentExecutor` trait, `StandardExecutor`       |
//! | [`timeline`]   | `BattleTimeline`, snapshots                      |
//! | [`builder`]    | `BattleTimelineBuilder`                          |
//! | [`slow_motion`]| Real-time pacing window                          |

pub mod builder;
pub mod error;
pub mod executor;
pub mod queue;
pub mod slow_motion;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use builder::BattleTimelineBuilder;
pub use error::{TimelineError, TimelineResult};
pub use executor::{ExecContext, IntentExecutor, StandardExecutor};
pub use queue::{IntentQueue, ScheduleOptions, ScheduledIntent};
pub use slow_motion::SlowMotion;
pub use timeline::{BattleTimeline, ScheduledIntentInfo};
