//! Plain data row types written by log backends.

use tt_core::{Feedback, GridPoint, InteractionKind, UnitId};

/// One processed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub executed:     u64,
    pub interactions: u64,
}

/// One arbitrated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionRow {
    pub tick:   u64,
    pub kind:   InteractionKind,
    /// The attacker (or the lower-id side of a clash).
    pub first:  UnitId,
    pub second: UnitId,
}

/// One presentation event, flattened to a fixed set of columns.
///
/// Columns that do not apply to `event` stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub tick:     u64,
    pub event:    &'static str,
    pub at:       Option<GridPoint>,
    pub unit:     Option<UnitId>,
    /// Damage amount, shake or bounce intensity, or the new time scale.
    pub value:    Option<f32>,
    /// Shake or hit-stop duration in seconds.
    pub duration: Option<f32>,
    /// Status label text, or `big` for heavy damage numbers.
    pub label:    Option<&'static str>,
}

impl FeedbackRow {
    fn empty(tick: u64, event: &'static str) -> Self {
        Self { tick, event, at: None, unit: None, value: None, duration: None, label: None }
    }

    pub fn from_feedback(tick: u64, feedback: &Feedback) -> Self {
        match *feedback {
            Feedback::StatusText { at, label } => Self {
                at:    Some(at),
                label: Some(label.as_str()),
                ..Self::empty(tick, "status_text")
            },
            Feedback::DamageNumber { at, amount, big } => Self {
                at:    Some(at),
                value: Some(amount),
                label: big.then_some("big"),
                ..Self::empty(tick, "damage_number")
            },
            Feedback::ScreenShake { intensity, duration_secs } => Self {
                value:    Some(intensity),
                duration: Some(duration_secs),
                ..Self::empty(tick, "screen_shake")
            },
            Feedback::HitStop { duration_secs } => Self {
                duration: Some(duration_secs),
                ..Self::empty(tick, "hit_stop")
            },
            Feedback::Bounce { unit, intensity } => Self {
                unit:  Some(unit),
                value: Some(intensity),
                ..Self::empty(tick, "bounce")
            },
        }
    }

    pub fn counter_move(tick: u64, unit: UnitId) -> Self {
        Self { unit: Some(unit), ..Self::empty(tick, "counter_move") }
    }

    pub fn time_scale(tick: u64, scale: f32) -> Self {
        Self { value: Some(scale), ..Self::empty(tick, "time_scale") }
    }
}
