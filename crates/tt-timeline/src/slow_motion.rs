//! Real-time pacing scale with a deadline.
//!
//! Slow motion never touches the tick clock.  It only tells the caller how
//! much game time to feed `advance_time` per real second until it expires.

/// An active slow-motion window.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SlowMotion {
    pub scale:               f32,
    /// Unscaled seconds left before the scale returns to 1.
    pub remaining_real_secs: f32,
}

impl SlowMotion {
    pub fn new(scale: f32, real_secs: f32) -> Self {
        Self { scale, remaining_real_secs: real_secs.max(0.0) }
    }

    /// Count `real_delta` seconds off the deadline.  Returns `true` once the
    /// window has expired.
    pub fn elapse(&mut self, real_delta: f32) -> bool {
        if real_delta > 0.0 {
            self.remaining_real_secs -= real_delta;
        }
        self.remaining_real_secs <= 0.0
    }
}
