//! Strongly typed identifier wrappers.
//!
//! `IntentId` and `GroupId` are plain monotonically issued counters.
//! `UnitId` is a generation-checked handle into the unit store: the slot
//! index may be reused after a unit is despawned, but the generation is
//! bumped so stale handles never resolve to the new occupant.

use std::fmt;

/// Generate a typed counter wrapper around a `u64`.
macro_rules! counter_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u64);

        impl $name {
            /// The raw counter value.
            #[inline(always)]
            pub fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

counter_id! {
    /// Handle returned by `BattleTimeline::schedule`.  Issued from 1 upward.
    pub struct IntentId;
}

counter_id! {
    /// Tag shared by a batch of scheduled intents for bulk cancellation.
    /// `GroupId::NONE` (0) means "ungrouped".
    pub struct GroupId;
}

impl GroupId {
    pub const NONE: GroupId = GroupId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

// ── UnitId ────────────────────────────────────────────────────────────────────

/// Generation-checked handle to a unit in `UnitStore`.
///
/// Ordering is by `(index, generation)`, which gives a stable iteration order
/// for registries and area queries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId {
    pub index:      u32,
    pub generation: u32,
}

impl UnitId {
    #[inline]
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index for direct `Vec` access.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({}v{})", self.index, self.generation)
    }
}
