//! Collision and clash-residual resolution.

use tracing::debug;

use tt_core::{CombatConfig, CombatObserver, Feedback, GridDirection, GridPoint, StatusLabel, UnitId};
use tt_intent::ActionDefinition;
use tt_unit::World;

use crate::{feel, momentum};

/// What the hit did to the target's movement state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ImpactStatus {
    /// Too weak to move the target.
    Unmoved,
    /// Pushed without a status change.
    Displaced,
    Staggered,
    KnockedDown,
}

/// Numbers produced by one resolved impact.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactReport {
    pub target:             UnitId,
    pub delivered_momentum: f32,
    pub impact_velocity:    f32,
    pub damage:             f32,
    /// Cells the impact asked for.
    pub displacement:       u32,
    /// Cells actually travelled before something blocked the push.
    pub moved:              u32,
    /// `None` when source and target share a vertex.
    pub direction:          Option<GridDirection>,
    pub status:             ImpactStatus,
}

/// Resolve an unopposed hit of `action` by `attacker` on `target`.
///
/// Updates both units' adrenaline, the target's health and status flags,
/// and pushes the target away from the attacker.  `None` if either handle
/// is stale or both name the same unit.
pub fn resolve_collision<O: CombatObserver + ?Sized>(
    world:    &mut World,
    config:   &CombatConfig,
    observer: &mut O,
    attacker: UnitId,
    target:   UnitId,
    action:   &ActionDefinition,
) -> Option<ImpactReport> {
    let (atk, tgt) = world.units.get_pair_mut(attacker, target)?;

    let delivered = momentum(config, atk, action);
    let velocity = delivered / tgt.mass;
    let reduction = tgt.armor / (tgt.armor + config.armor_constant);
    let damage = action.base_damage * (1.0 - reduction) + delivered * config.impact_damage_factor;

    atk.gain_adrenaline(damage * config.attacker_adrenaline_share, config.resource_cap);
    tgt.gain_adrenaline(damage * config.target_adrenaline_share, config.resource_cap);
    tgt.take_damage(damage);

    let speed = tgt.swiftness;
    let status = if velocity >= speed * config.knockdown_ratio {
        tgt.knocked_down = true;
        ImpactStatus::KnockedDown
    } else if velocity >= speed * config.stagger_ratio {
        tgt.staggered = true;
        ImpactStatus::Staggered
    } else if velocity > speed * config.impact_ratio {
        ImpactStatus::Displaced
    } else {
        ImpactStatus::Unmoved
    };
    let displacement = match status {
        ImpactStatus::Unmoved => 0,
        _ => (velocity / speed).floor() as u32,
    };
    let source = atk.position;
    let at = tgt.position;
    let direction = source.direction_to(at);

    debug!(
        %attacker, %target, action = %action.id,
        damage, velocity, ?status, "collision resolved"
    );

    feel::emit_hit(observer, target, at, damage, velocity);
    match status {
        ImpactStatus::KnockedDown => observer.on_feedback(&Feedback::StatusText {
            at,
            label: StatusLabel::Knockdown,
        }),
        ImpactStatus::Staggered => observer.on_feedback(&Feedback::StatusText {
            at,
            label: StatusLabel::Stagger,
        }),
        _ => {}
    }

    let moved = match direction {
        Some(dir) => displace(world, target, dir, displacement),
        None => 0,
    };

    Some(ImpactReport {
        target,
        delivered_momentum: delivered,
        impact_velocity: velocity,
        damage,
        displacement,
        moved,
        direction,
        status,
    })
}

/// Apply the momentum left over from a clash to `victim`, pushing it away
/// from `source`.
///
/// One-sided: only the victim's adrenaline and health change, and no status
/// flag is set.  `None` for a stale handle.
pub fn apply_clash_result<O: CombatObserver + ?Sized>(
    world:    &mut World,
    config:   &CombatConfig,
    observer: &mut O,
    victim:   UnitId,
    residual: f32,
    source:   GridPoint,
) -> Option<ImpactReport> {
    let unit = world.units.get_mut(victim)?;

    let velocity = residual / unit.mass;
    let damage = residual * config.clash_damage_factor;
    unit.gain_adrenaline(damage * config.clash_adrenaline_share, config.resource_cap);
    unit.take_damage(damage);

    let displacement = (velocity / unit.swiftness).floor() as u32;
    let at = unit.position;
    let direction = source.direction_to(at);

    debug!(%victim, residual, damage, velocity, displacement, "clash residual applied");
    feel::emit_hit(observer, victim, at, damage, velocity);

    let moved = match direction {
        Some(dir) => displace(world, victim, dir, displacement),
        None => 0,
    };

    Some(ImpactReport {
        target: victim,
        delivered_momentum: residual,
        impact_velocity: velocity,
        damage,
        displacement,
        moved,
        direction,
        status: if displacement > 0 { ImpactStatus::Displaced } else { ImpactStatus::Unmoved },
    })
}

/// Push `unit` up to `steps` vertices along `direction`.
///
/// Each step moves the unit's whole volume and only if the destination cells
/// are free for it; the push stops at the first blocked step.  Returns the
/// number of steps taken.  Edge-aligned directions have no vertex step and
/// move nothing.
pub fn displace(world: &mut World, unit: UnitId, direction: GridDirection, steps: u32) -> u32 {
    let mut moved = 0;
    while moved < steps {
        let Some(current) = world.units.get(unit) else {
            break;
        };
        let Some(next) = current.position.neighbor(direction) else {
            break;
        };
        let cells = current.footprint_at(next);
        if world.grid.is_space_occupied(&cells, Some(unit)) {
            debug!(%unit, %next, "displacement blocked");
            break;
        }
        world.relocate(unit, next);
        moved += 1;
    }
    moved
}
