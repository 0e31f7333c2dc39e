//! Action definitions and the named action library.
//!
//! Attack patterns are authored offline; this module only stores them.  The
//! library binds the five stock archetypes to whatever pattern tables the
//! caller supplies.

use std::collections::BTreeMap;
use std::sync::Arc;

use tt_core::TrianglePoint;
use tt_grid::Shape;
use tt_unit::CombatUnit;

/// What kind of intent an action produces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionType {
    #[default]
    None,
    Attack,
    Block,
    Dodge,
    Move,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::None   => "none",
            ActionType::Attack => "attack",
            ActionType::Block  => "block",
            ActionType::Dodge  => "dodge",
            ActionType::Move   => "move",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an attack transfers momentum.  The transfer coefficient for each
/// variant lives in `CombatConfig`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactType {
    Blunt,
    Slash,
    Pierce,
}

/// Static data for one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDefinition {
    /// Library key, e.g. `"QuickSlash"`.
    pub id:               String,
    /// Display name, e.g. `"Quick Slash"`.
    pub name:             String,
    pub kind:             ActionType,
    /// Wind-up before the intent lands; the usual scheduling delay.
    pub duration_secs:    f32,
    pub base_damage:      f32,
    pub impact:           ImpactType,
    pub stamina_cost:     f32,
    pub force_multiplier: f32,
    /// Affected triangles relative to the attacker.
    pub pattern:          Shape,
}

impl ActionDefinition {
    /// Triangles this action covers when performed by `unit` where it stands.
    pub fn affected_cells(&self, unit: &CombatUnit) -> Vec<TrianglePoint> {
        self.pattern.cells_at(unit.position, unit.facing)
    }
}

/// Named registry of shared action definitions, iterated in key order.
#[derive(Clone, Debug, Default)]
pub struct ActionLibrary {
    actions: BTreeMap<String, Arc<ActionDefinition>>,
}

impl ActionLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five stock attacks, each bound to `pattern_for(pattern_key)`.
    ///
    /// | Id            | Pattern key   | Secs | Damage | Impact | Stamina | Force |
    /// |---------------|---------------|------|--------|--------|---------|-------|
    /// | `QuickSlash`  | `Slash`       | 0.5  | 15     | Slash  | 10      | 0.8   |
    /// | `HeavySmash`  | `Smash`       | 1.5  | 40     | Blunt  | 25      | 1.6   |
    /// | `WideCleave`  | `Cleave`      | 1.0  | 20     | Slash  | 20      | 1.2   |
    /// | `SpearThrust` | `Thrust`      | 0.8  | 25     | Pierce | 15      | 1.0   |
    /// | `Whirlwind`   | `Whirlwind`   | 2.0  | 30     | Slash  | 40      | 2.5   |
    pub fn archetypes(mut pattern_for: impl FnMut(&str) -> Shape) -> Self {
        const STOCK: [(&str, &str, &str, f32, f32, ImpactType, f32, f32); 5] = [
            ("QuickSlash",  "Quick Slash",  "Slash",     0.5, 15.0, ImpactType::Slash,  10.0, 0.8),
            ("HeavySmash",  "Heavy Smash",  "Smash",     1.5, 40.0, ImpactType::Blunt,  25.0, 1.6),
            ("WideCleave",  "Wide Cleave",  "Cleave",    1.0, 20.0, ImpactType::Slash,  20.0, 1.2),
            ("SpearThrust", "Spear Thrust", "Thrust",    0.8, 25.0, ImpactType::Pierce, 15.0, 1.0),
            ("Whirlwind",   "Whirlwind",    "Whirlwind", 2.0, 30.0, ImpactType::Slash,  40.0, 2.5),
        ];

        let mut library = Self::new();
        for (id, name, pattern_key, secs, damage, impact, stamina, force) in STOCK {
            library.insert(ActionDefinition {
                id:               id.to_owned(),
                name:             name.to_owned(),
                kind:             ActionType::Attack,
                duration_secs:    secs,
                base_damage:      damage,
                impact,
                stamina_cost:     stamina,
                force_multiplier: force,
                pattern:          pattern_for(pattern_key),
            });
        }
        library
    }

    /// Add or replace a definition under its `id`; returns the shared handle.
    pub fn insert(&mut self, action: ActionDefinition) -> Arc<ActionDefinition> {
        let action = Arc::new(action);
        self.actions.insert(action.id.clone(), Arc::clone(&action));
        action
    }

    pub fn get(&self, id: &str) -> Option<Arc<ActionDefinition>> {
        self.actions.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ActionDefinition>> + '_ {
        self.actions.values()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
