//! The per-tick arbitration pass and interaction effects.

use tracing::debug;

use tt_core::{CombatConfig, CombatObserver, Feedback, InteractionKind, StatusLabel, Tick, UnitId};
use tt_intent::CombatIntent;
use tt_physics::{ImpactReport, apply_clash_result, momentum};
use tt_unit::World;

use crate::{Pairing, classify};

/// Hit-stop played on a successful parry.
const PARRY_HIT_STOP_SECS: f32 = 0.1;

/// One resolved interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    pub kind:   InteractionKind,
    /// Lower unit id for a clash, the attacker otherwise.
    pub first:  UnitId,
    /// Higher unit id for a clash, the defender or mover otherwise.
    pub second: UnitId,
    /// Clash residual impact, if the momenta differed.
    pub impact: Option<ImpactReport>,
}

/// Ask the timeline to slow real-time pacing.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SlowMotionRequest {
    pub scale:     f32,
    pub real_secs: f32,
}

/// Everything one arbitration pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArbiterReport {
    pub interactions: Vec<Interaction>,
    /// Set when at least one dodge succeeded.
    pub slow_motion:  Option<SlowMotionRequest>,
}

/// Detect and resolve pairwise interactions among `intents`, all due at
/// `tick`.
///
/// Mutates intents in place: resolved intents that must not execute are
/// cancelled, releasing any move-step reservation.  Intents whose owner is
/// gone never interact.
pub fn resolve<O: CombatObserver + ?Sized>(
    tick:     Tick,
    intents:  &mut [CombatIntent],
    world:    &mut World,
    config:   &CombatConfig,
    observer: &mut O,
) -> ArbiterReport {
    let mut report = ArbiterReport::default();
    let n = intents.len();
    if n < 2 {
        return report;
    }

    let mut processed = vec![false; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if processed[i] || processed[j] {
                continue;
            }
            if !is_live(world, &intents[i]) || !is_live(world, &intents[j]) {
                continue;
            }
            let Some(pairing) = classify(world, intents, i, j) else {
                continue;
            };

            let interaction = apply(pairing, intents, world, config, observer, &mut report);
            debug!(
                %tick,
                kind = %interaction.kind,
                first = %interaction.first,
                second = %interaction.second,
                "interaction resolved"
            );
            observer.on_interaction(tick, interaction.kind, interaction.first, interaction.second);
            report.interactions.push(interaction);

            processed[i] = true;
            processed[j] = true;
        }
    }
    report
}

fn is_live(world: &World, intent: &CombatIntent) -> bool {
    !intent.is_cancelled() && world.units.contains(intent.owner)
}

fn status_text<O: CombatObserver + ?Sized>(
    observer: &mut O,
    world:    &World,
    unit:     UnitId,
    label:    StatusLabel,
) {
    if let Some(u) = world.unit(unit) {
        observer.on_feedback(&Feedback::StatusText { at: u.position, label });
    }
}

fn gain_focus(world: &mut World, unit: UnitId) {
    if let Some(u) = world.unit_mut(unit) {
        u.gain_focus();
    }
}

fn apply<O: CombatObserver + ?Sized>(
    pairing:  Pairing,
    intents:  &mut [CombatIntent],
    world:    &mut World,
    config:   &CombatConfig,
    observer: &mut O,
    report:   &mut ArbiterReport,
) -> Interaction {
    match pairing {
        Pairing::Clash { first, second } => {
            clash(first, second, intents, world, config, observer)
        }

        Pairing::Parry { attack, block } => {
            let (attacker, blocker) = (intents[attack].owner, intents[block].owner);
            intents[attack].cancel(&mut world.grid);
            intents[block].cancel(&mut world.grid);
            observer.on_feedback(&Feedback::HitStop { duration_secs: PARRY_HIT_STOP_SECS });
            status_text(observer, world, blocker, StatusLabel::Parry);
            Interaction { kind: InteractionKind::Parry, first: attacker, second: blocker, impact: None }
        }

        Pairing::Dodge { attack, dodge } => {
            let (attacker, dodger) = (intents[attack].owner, intents[dodge].owner);
            intents[attack].cancel(&mut world.grid);
            report.slow_motion = Some(SlowMotionRequest {
                scale:     config.slow_motion_scale,
                real_secs: config.slow_motion_secs,
            });
            observer.on_counter_move_requested(dodger);
            status_text(observer, world, dodger, StatusLabel::Dodge);
            Interaction { kind: InteractionKind::Dodge, first: attacker, second: dodger, impact: None }
        }

        Pairing::Intercept { attack, mover } => {
            let (attacker, runner) = (intents[attack].owner, intents[mover].owner);
            gain_focus(world, attacker);
            intents[mover].cancel(&mut world.grid);
            if let Some(u) = world.unit_mut(runner) {
                u.knocked_down = true;
            }
            status_text(observer, world, runner, StatusLabel::Intercept);
            Interaction { kind: InteractionKind::Intercept, first: attacker, second: runner, impact: None }
        }

        Pairing::Escape { attack, mover } => {
            let (attacker, runner) = (intents[attack].owner, intents[mover].owner);
            gain_focus(world, runner);
            status_text(observer, world, runner, StatusLabel::Escape);
            Interaction { kind: InteractionKind::Escape, first: attacker, second: runner, impact: None }
        }
    }
}

/// Both attacks cancel; the momentum difference lands on the weaker side.
fn clash<O: CombatObserver + ?Sized>(
    i:        usize,
    j:        usize,
    intents:  &mut [CombatIntent],
    world:    &mut World,
    config:   &CombatConfig,
    observer: &mut O,
) -> Interaction {
    // Canonical order so [a, b] and [b, a] compute identical numbers.
    let (i, j) = if intents[i].owner <= intents[j].owner { (i, j) } else { (j, i) };
    let (a, b) = (intents[i].owner, intents[j].owner);

    let strength = |world: &World, intent: &CombatIntent| -> f32 {
        match (world.unit(intent.owner), intent.attack_action()) {
            (Some(unit), Some(action)) => momentum(config, unit, action),
            _ => 0.0,
        }
    };
    let pa = strength(world, &intents[i]);
    let pb = strength(world, &intents[j]);

    gain_focus(world, a);
    gain_focus(world, b);
    intents[i].cancel(&mut world.grid);
    intents[j].cancel(&mut world.grid);

    let residual = pa - pb;
    let impact = if residual > 0.0 {
        let source = world.unit(a).map(|u| u.position);
        source.and_then(|at| apply_clash_result(world, config, observer, b, residual, at))
    } else if residual < 0.0 {
        let source = world.unit(b).map(|u| u.position);
        source.and_then(|at| apply_clash_result(world, config, observer, a, -residual, at))
    } else {
        status_text(observer, world, a, StatusLabel::Even);
        None
    };

    Interaction { kind: InteractionKind::Clash, first: a, second: b, impact }
}
