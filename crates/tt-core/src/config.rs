//! Tunable combat constants.
//!
//! `CombatConfig::default()` reproduces the canonical rules; applications may
//! load an override from JSON/TOML (with the `serde` feature) and must call
//! [`CombatConfig::validate`] before handing it to the timeline.

use crate::{CoreError, CoreResult};

/// Physics coefficients, status thresholds, resource caps and slow-motion
/// pacing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    // ── Momentum transfer per impact type ─────────────────────────────────
    pub blunt_transfer:  f32,
    pub slash_transfer:  f32,
    pub pierce_transfer: f32,

    // ── Damage ────────────────────────────────────────────────────────────
    /// Armor reduction is `armor / (armor + armor_constant)`.
    pub armor_constant:       f32,
    /// Extra damage per unit of delivered momentum.
    pub impact_damage_factor: f32,

    // ── Resources ─────────────────────────────────────────────────────────
    /// Share of dealt damage added to the attacker's adrenaline.
    pub attacker_adrenaline_share: f32,
    /// Share of taken damage added to the target's adrenaline.
    pub target_adrenaline_share:   f32,
    /// Upper bound for adrenaline.
    pub resource_cap:              f32,

    // ── Status thresholds (multiples of the target's swiftness) ───────────
    pub knockdown_ratio: f32,
    pub stagger_ratio:   f32,
    /// Strictly above this ratio the target is displaced.
    pub impact_ratio:    f32,

    // ── Clash residual ────────────────────────────────────────────────────
    pub clash_damage_factor:     f32,
    pub clash_adrenaline_share:  f32,

    // ── Dodge slow motion ─────────────────────────────────────────────────
    pub slow_motion_scale: f32,
    /// Real-world (unscaled) seconds the slow motion lasts.
    pub slow_motion_secs:  f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            blunt_transfer:  1.0,
            slash_transfer:  0.6,
            pierce_transfer: 0.3,

            armor_constant:       100.0,
            impact_damage_factor: 0.02,

            attacker_adrenaline_share: 0.1,
            target_adrenaline_share:   0.2,
            resource_cap:              100.0,

            knockdown_ratio: 1.5,
            stagger_ratio:   1.0,
            impact_ratio:    0.5,

            clash_damage_factor:    0.1,
            clash_adrenaline_share: 0.5,

            slow_motion_scale: 0.05,
            slow_motion_secs:  2.0,
        }
    }
}

impl CombatConfig {
    /// Reject non-finite or negative coefficients and misordered thresholds.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("blunt_transfer",            self.blunt_transfer),
            ("slash_transfer",            self.slash_transfer),
            ("pierce_transfer",           self.pierce_transfer),
            ("armor_constant",            self.armor_constant),
            ("impact_damage_factor",      self.impact_damage_factor),
            ("attacker_adrenaline_share", self.attacker_adrenaline_share),
            ("target_adrenaline_share",   self.target_adrenaline_share),
            ("resource_cap",              self.resource_cap),
            ("knockdown_ratio",           self.knockdown_ratio),
            ("stagger_ratio",             self.stagger_ratio),
            ("impact_ratio",              self.impact_ratio),
            ("clash_damage_factor",       self.clash_damage_factor),
            ("clash_adrenaline_share",    self.clash_adrenaline_share),
            ("slow_motion_scale",         self.slow_motion_scale),
            ("slow_motion_secs",          self.slow_motion_secs),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.armor_constant == 0.0 {
            return Err(CoreError::Config("armor_constant must be positive".into()));
        }
        if !(self.impact_ratio <= self.stagger_ratio && self.stagger_ratio <= self.knockdown_ratio) {
            return Err(CoreError::Config(format!(
                "thresholds must satisfy impact ≤ stagger ≤ knockdown, got {} / {} / {}",
                self.impact_ratio, self.stagger_ratio, self.knockdown_ratio
            )));
        }
        if self.slow_motion_scale == 0.0 || self.slow_motion_scale > 1.0 {
            return Err(CoreError::Config(format!(
                "slow_motion_scale must be in (0, 1], got {}",
                self.slow_motion_scale
            )));
        }
        Ok(())
    }
}
