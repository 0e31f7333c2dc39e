//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter at a fixed rate of
//! [`TICKS_PER_SECOND`].  Logical time is stepped:
//!
//!   current_time = tick * SECONDS_PER_TICK
//!
//! All scheduling arithmetic happens on integer ticks, so two runs that
//! consume the same number of ticks fire the same intents in the same order
//! no matter how real time was chunked between update calls.

use std::fmt;

/// Fixed logical tick rate.
pub const TICKS_PER_SECOND: u32 = 60;

/// Duration of one tick in seconds.
pub const SECONDS_PER_TICK: f32 = 1.0 / TICKS_PER_SECOND as f32;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Logical seconds since tick 0.
    #[inline]
    pub fn as_secs(self) -> f32 {
        self.0 as f32 * SECONDS_PER_TICK
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Delay conversion ──────────────────────────────────────────────────────────

/// Convert a delay in seconds to a whole number of ticks.
///
/// Rounds to the nearest tick with ties rounding up.  Negative and NaN delays
/// clamp to zero ("this tick").
#[inline]
pub fn delay_to_ticks(delay_secs: f32) -> u64 {
    let ticks = f64::from(delay_secs) * f64::from(TICKS_PER_SECOND);
    if ticks.is_nan() || ticks <= 0.0 {
        return 0;
    }
    (ticks + 0.5).floor() as u64
}
