//! Pair classification.

use tt_core::{TrianglePoint, UnitId};
use tt_intent::{CombatIntent, IntentKind};
use tt_unit::World;

/// A recognised interaction between the intents at two batch indices.
///
/// One-sided variants name the attack first regardless of batch order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Pairing {
    Clash { first: usize, second: usize },
    Parry { attack: usize, block: usize },
    Dodge { attack: usize, dodge: usize },
    Intercept { attack: usize, mover: usize },
    Escape { attack: usize, mover: usize },
}

/// Cells the attack intent covers from its owner's current stance.
///
/// `None` for non-attacks and for attacks whose owner is gone.
fn attack_area(world: &World, intent: &CombatIntent) -> Option<Vec<TrianglePoint>> {
    let action = intent.attack_action()?;
    let owner = world.unit(intent.owner)?;
    Some(action.affected_cells(owner))
}

/// `true` if `intent` is an attack whose area holds `unit`.
pub fn is_targeting(world: &World, intent: &CombatIntent, unit: UnitId) -> bool {
    match attack_area(world, intent) {
        Some(area) => world.grid.units_in_area(&area, Some(intent.owner)).contains(&unit),
        None => false,
    }
}

fn overlaps(area: &[TrianglePoint], cells: &[TrianglePoint]) -> bool {
    area.iter().any(|cell| cells.contains(cell))
}

/// Classify the intents at `i` and `j`.  `None` if they do not interact.
pub fn classify(world: &World, intents: &[CombatIntent], i: usize, j: usize) -> Option<Pairing> {
    let (a, b) = (&intents[i], &intents[j]);

    // Orient one-sided pairs so the attack comes first.
    let (attack, other, ai, oi) = match (&a.kind, &b.kind) {
        (IntentKind::Attack { .. }, IntentKind::Attack { .. }) => {
            let mutual = is_targeting(world, a, b.owner) && is_targeting(world, b, a.owner);
            return mutual.then_some(Pairing::Clash { first: i, second: j });
        }
        (IntentKind::Attack { .. }, _) => (a, b, i, j),
        (_, IntentKind::Attack { .. }) => (b, a, j, i),
        _ => return None,
    };

    match &other.kind {
        IntentKind::Block if is_targeting(world, attack, other.owner) => {
            Some(Pairing::Parry { attack: ai, block: oi })
        }
        IntentKind::Dodge if is_targeting(world, attack, other.owner) => {
            Some(Pairing::Dodge { attack: ai, dodge: oi })
        }
        IntentKind::MoveStep(step) => {
            let area = attack_area(world, attack)?;
            if overlaps(&area, &step.to_cells) {
                Some(Pairing::Intercept { attack: ai, mover: oi })
            } else if overlaps(&area, &step.from_cells) {
                Some(Pairing::Escape { attack: ai, mover: oi })
            } else {
                None
            }
        }
        _ => None,
    }
}
