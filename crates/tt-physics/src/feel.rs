//! Presentation feedback for a landed hit.
//!
//! Nothing here feeds back into the simulation.

use tt_core::{CombatObserver, Feedback, GridPoint, UnitId};

/// Impact velocity above which a damage number is drawn big.
const BIG_HIT_VELOCITY: f32 = 15.0;
/// Damage above which a damage number is drawn big.
const BIG_HIT_DAMAGE: f32 = 40.0;

/// Normalised hit strength in `[0, 1]`.
#[inline]
pub fn intensity(damage: f32, impact_velocity: f32) -> f32 {
    (damage / 50.0 + impact_velocity / 20.0).clamp(0.0, 1.0)
}

/// Presentation feedback for one hit on `unit` standing at `at`.
pub fn emit_hit<O: CombatObserver + ?Sized>(
    observer:        &mut O,
    unit:            UnitId,
    at:              GridPoint,
    damage:          f32,
    impact_velocity: f32,
) {
    let big = impact_velocity > BIG_HIT_VELOCITY || damage > BIG_HIT_DAMAGE;
    observer.on_feedback(&Feedback::DamageNumber { at, amount: damage, big });

    let intensity = intensity(damage, impact_velocity);
    if intensity > 0.1 {
        observer.on_feedback(&Feedback::ScreenShake {
            intensity:     intensity * 0.5,
            duration_secs: 0.1 + intensity * 0.3,
        });
    }
    if intensity > 0.2 {
        observer.on_feedback(&Feedback::HitStop { duration_secs: 0.05 + intensity * 0.1 });
    }
    observer.on_feedback(&Feedback::Bounce { unit, intensity });
}
