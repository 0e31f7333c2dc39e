//! `UnitStore`: slot storage addressed by generation-checked [`UnitId`]s.
//!
//! A despawned slot goes on a free list and is reused by the next insert,
//! with its generation bumped.  A handle to the old occupant therefore never
//! resolves to the new one, which is what lets intents refer to units by id
//! and treat "not found" as "already cancelled".

use tt_core::UnitId;

use crate::CombatUnit;

struct Slot {
    generation: u32,
    unit:       Option<CombatUnit>,
}

/// Owning storage for every live [`CombatUnit`].
#[derive(Default)]
pub struct UnitStore {
    slots: Vec<Slot>,
    free:  Vec<u32>,
    len:   usize,
}

impl UnitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `unit` and return its handle.
    pub fn insert(&mut self, unit: CombatUnit) -> UnitId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.unit = Some(unit);
            return UnitId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, unit: Some(unit) });
        UnitId::new(index, 0)
    }

    /// Remove and return the unit behind `id`.  `None` for stale handles.
    pub fn remove(&mut self, id: UnitId) -> Option<CombatUnit> {
        let slot = self.slots.get_mut(id.slot())?;
        if slot.generation != id.generation {
            return None;
        }
        let unit = slot.unit.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(unit)
    }

    #[inline]
    pub fn get(&self, id: UnitId) -> Option<&CombatUnit> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.unit.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.unit.as_mut())
    }

    /// Mutable access to two distinct units at once.
    ///
    /// `None` if either handle is stale or both name the same unit.
    pub fn get_pair_mut(
        &mut self,
        a: UnitId,
        b: UnitId,
    ) -> Option<(&mut CombatUnit, &mut CombatUnit)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (lo, hi, swapped) = if a.index < b.index { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi.slot());
        let first = head[lo.slot()].unit.as_mut()?;
        let second = tail[0].unit.as_mut()?;
        Some(if swapped { (second, first) } else { (first, second) })
    }

    #[inline]
    pub fn contains(&self, id: UnitId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live units.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live units in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &CombatUnit)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.unit
                .as_ref()
                .map(|unit| (UnitId::new(index as u32, slot.generation), unit))
        })
    }

    /// Handles of all live units in ascending slot order.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.iter().map(|(id, _)| id)
    }
}
