use tt_core::CombatConfig;
use tt_intent::{ActionDefinition, ImpactType};
use tt_unit::CombatUnit;

/// Share of momentum an impact type transfers to the target.
#[inline]
pub fn transfer_coefficient(config: &CombatConfig, impact: ImpactType) -> f32 {
    match impact {
        ImpactType::Blunt  => config.blunt_transfer,
        ImpactType::Slash  => config.slash_transfer,
        ImpactType::Pierce => config.pierce_transfer,
    }
}

/// Momentum `unit` delivers when performing `action`.
#[inline]
pub fn momentum(config: &CombatConfig, unit: &CombatUnit, action: &ActionDefinition) -> f32 {
    unit.mass * unit.swiftness * transfer_coefficient(config, action.impact) * action.force_multiplier
}
