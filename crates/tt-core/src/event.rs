//! Interaction outcomes and presentation feedback.
//!
//! Feedback events are fire-and-forget hooks for the presentation layer
//! (status text, damage numbers, screen shake, hit-stop).  The core emits
//! them through [`CombatObserver::on_feedback`][crate::CombatObserver::on_feedback]
//! and never reads anything back.

use crate::{GridPoint, UnitId};

/// The five recognised two-intent conflicts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionKind {
    Clash,
    Parry,
    Dodge,
    Intercept,
    Escape,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Clash     => "clash",
            InteractionKind::Parry     => "parry",
            InteractionKind::Dodge     => "dodge",
            InteractionKind::Intercept => "intercept",
            InteractionKind::Escape    => "escape",
        }
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Floating status text shown above a unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusLabel {
    Knockdown,
    Stagger,
    Parry,
    Dodge,
    Intercept,
    Escape,
    Even,
}

impl StatusLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::Knockdown => "KNOCKDOWN!",
            StatusLabel::Stagger   => "STAGGER",
            StatusLabel::Parry     => "PARRY",
            StatusLabel::Dodge     => "DODGE!",
            StatusLabel::Intercept => "INTERCEPT!",
            StatusLabel::Escape    => "ESCAPE",
            StatusLabel::Even      => "EVEN!",
        }
    }
}

/// A presentation-layer notification.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    StatusText { at: GridPoint, label: StatusLabel },
    /// `big` marks heavy hits (impact velocity > 15 or damage > 40).
    DamageNumber { at: GridPoint, amount: f32, big: bool },
    ScreenShake { intensity: f32, duration_secs: f32 },
    HitStop { duration_secs: f32 },
    /// Squash-and-stretch on the struck unit's model.
    Bounce { unit: UnitId, intensity: f32 },
}
