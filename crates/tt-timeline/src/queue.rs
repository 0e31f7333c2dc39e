//! `IntentQueue`: pending intents kept in firing order.
//!
//! # Ordering
//!
//! Entries are sorted by `(tick ↑, priority ↓, sequence ↑)` at all times.
//! A new entry goes after every entry whose key is less than or equal to its
//! own, so equal keys keep submission order.
//!
//! The sequence counter is reset by the timeline at the start of each tick's
//! processing.  Reactions scheduled while a tick runs are therefore ordered
//! among themselves from zero, not by how many intents earlier ticks saw.

use std::cmp::Reverse;

use tracing::trace;

use tt_core::{GroupId, IntentId, Tick, delay_to_ticks};
use tt_intent::CombatIntent;

/// Per-call scheduling options.
#[derive(Clone, Debug, Default)]
pub struct ScheduleOptions {
    /// Free-form label shown in snapshots.  Defaults to the intent's own
    /// label.
    pub description: Option<String>,
    /// Batch tag for [`cancel_group`](crate::BattleTimeline::cancel_group).
    pub group:       GroupId,
    /// Higher fires first among intents due on the same tick.
    pub priority:    i32,
}

impl ScheduleOptions {
    pub fn described(description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..Self::default() }
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = group;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// One pending record.  Owned by the queue until it fires or is cancelled.
#[derive(Debug)]
pub struct ScheduledIntent {
    pub id:          IntentId,
    pub group:       GroupId,
    pub tick:        Tick,
    pub priority:    i32,
    pub sequence:    u64,
    pub intent:      CombatIntent,
    pub description: String,
}

impl ScheduledIntent {
    #[inline]
    fn key(&self) -> (Tick, Reverse<i32>, u64) {
        (self.tick, Reverse(self.priority), self.sequence)
    }
}

#[derive(Debug)]
pub struct IntentQueue {
    entries:  Vec<ScheduledIntent>,
    next_id:  u64,
    sequence: u64,
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self { entries: Vec::new(), next_id: 1, sequence: 0 }
    }
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `intent` to fire `delay_secs` after `now` (rounded to the
    /// nearest tick, never before `now`).
    pub fn schedule(
        &mut self,
        now:        Tick,
        delay_secs: f32,
        intent:     CombatIntent,
        opts:       ScheduleOptions,
    ) -> IntentId {
        let id = IntentId(self.next_id);
        self.next_id += 1;
        let sequence = self.sequence;
        self.sequence += 1;

        let description = opts.description.unwrap_or_else(|| intent.to_string());
        let entry = ScheduledIntent {
            id,
            group:       opts.group,
            tick:        now + delay_to_ticks(delay_secs),
            priority:    opts.priority,
            sequence,
            intent,
            description,
        };
        trace!(
            %id, owner = %entry.intent.owner, tick = %entry.tick,
            priority = entry.priority, sequence, "intent scheduled"
        );

        let key = entry.key();
        let at = self.entries.partition_point(|e| e.key() <= key);
        self.entries.insert(at, entry);
        id
    }

    /// Restart the submission counter.  Called once per processed tick.
    pub fn reset_sequence(&mut self) {
        self.sequence = 0;
    }

    /// Remove every entry due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Tick) -> Vec<ScheduledIntent> {
        let due = self.entries.partition_point(|e| e.tick <= now);
        self.entries.drain(..due).collect()
    }

    /// Remove every entry matching `pred`, preserving the order of both the
    /// removed and the kept entries.
    pub fn remove_where(
        &mut self,
        mut pred: impl FnMut(&ScheduledIntent) -> bool,
    ) -> Vec<ScheduledIntent> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.entries).into_iter().partition(|e| pred(e));
        self.entries = kept;
        removed
    }

    /// Pending entries in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledIntent> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if the entries are in `(tick, -priority, sequence)` order.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].key() <= w[1].key())
    }
}
