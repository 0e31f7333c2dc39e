//! `BattleTimeline` and its fixed-step loop.

use tracing::{debug, trace};

use tt_arbiter::resolve;
use tt_core::{
    CombatConfig, CombatObserver, GroupId, IntentId, SECONDS_PER_TICK, TICKS_PER_SECOND, Tick,
    UnitId,
};
use tt_intent::{ActionType, CombatIntent};
use tt_unit::World;

use crate::{ExecContext, IntentExecutor, IntentQueue, ScheduleOptions, SlowMotion, StandardExecutor};

/// Slack when comparing the accumulator against one tick, so that chunks
/// such as 60 × (1/60 s) rounded to `f32` still add up to 60 ticks.  Only
/// the comparison uses it; each fired tick subtracts exactly one, so the
/// remainder may dip just below zero and time is never created.
const TICK_EPSILON: f64 = 1e-4;

/// Read-only view of one pending record, for diagnostics and UI.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledIntentInfo {
    pub id:          IntentId,
    pub group:       GroupId,
    pub tick:        Tick,
    /// `tick` in seconds.
    pub time:        f32,
    pub owner:       UnitId,
    pub kind:        ActionType,
    pub description: String,
}

/// The battle clock.  Owns the world and the pending queue.
///
/// Each processed tick runs to completion before the next begins:
///
/// ```text
/// ① reset the submission counter
/// ② drain every pending record due at or before the current tick
/// ③ cancel intents whose owner is gone
/// ④ arbitrate the batch (may cancel, may request slow motion)
/// ⑤ execute every uncancelled intent in queue order
/// ```
///
/// Create with [`BattleTimeline::new`] or
/// [`BattleTimelineBuilder`][crate::BattleTimelineBuilder].
pub struct BattleTimeline<E: IntentExecutor = StandardExecutor> {
    /// Units and occupancy.  Mutate between ticks, never from another thread.
    pub world: World,

    pub(crate) config:      CombatConfig,
    pub(crate) executor:    E,
    pub(crate) queue:       IntentQueue,
    pub(crate) tick:        Tick,
    /// Unconsumed time, in ticks.
    pub(crate) accumulator: f64,
    pub(crate) paused:      bool,
    pub(crate) slow_motion: Option<SlowMotion>,
    pub(crate) next_group:  u64,
}

impl BattleTimeline<StandardExecutor> {
    /// A timeline over `world` with the default rules and executor.
    pub fn new(world: World) -> Self {
        Self::from_parts(world, CombatConfig::default(), StandardExecutor)
    }
}

impl<E: IntentExecutor> BattleTimeline<E> {
    pub(crate) fn from_parts(world: World, config: CombatConfig, executor: E) -> Self {
        Self {
            world,
            config,
            executor,
            queue:       IntentQueue::new(),
            tick:        Tick::ZERO,
            accumulator: 0.0,
            paused:      false,
            slow_motion: None,
            next_group:  1,
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Queue `intent` to fire `delay_secs` from now with default options.
    pub fn schedule(&mut self, delay_secs: f32, intent: CombatIntent) -> IntentId {
        self.schedule_with(delay_secs, intent, ScheduleOptions::default())
    }

    /// Queue `intent` with explicit [`ScheduleOptions`].
    ///
    /// The delay is rounded to the nearest tick (ties up) and clamped at
    /// zero.  A zero delay fires on the next processed tick.
    pub fn schedule_with(
        &mut self,
        delay_secs: f32,
        intent:     CombatIntent,
        opts:       ScheduleOptions,
    ) -> IntentId {
        self.queue.schedule(self.tick, delay_secs, intent, opts)
    }

    /// A fresh group id, never [`GroupId::NONE`].
    pub fn reserve_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        id
    }

    /// Cancel every pending intent tagged `group`, releasing move-step
    /// reservations.  Returns the number removed.  No-op for
    /// [`GroupId::NONE`].
    pub fn cancel_group(&mut self, group: GroupId) -> usize {
        if group.is_none() {
            return 0;
        }
        let removed = self.queue.remove_where(|entry| entry.group == group);
        trace!(%group, removed = removed.len(), "group cancelled");
        self.discard(removed)
    }

    /// Cancel every pending intent owned by `unit`, releasing move-step
    /// reservations.  Returns the number removed.
    pub fn cancel_events(&mut self, unit: UnitId) -> usize {
        let removed = self.queue.remove_where(|entry| entry.intent.owner == unit);
        trace!(%unit, removed = removed.len(), "unit events cancelled");
        self.discard(removed)
    }

    /// Cancel the unit's pending intents, then take it off the battlefield.
    pub fn despawn(&mut self, unit: UnitId) -> Option<tt_unit::CombatUnit> {
        self.cancel_events(unit);
        self.world.despawn(unit)
    }

    /// Cancel everything pending.  Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.queue.remove_where(|_| true);
        self.discard(removed)
    }

    fn discard(&mut self, removed: Vec<crate::ScheduledIntent>) -> usize {
        let count = removed.len();
        for mut entry in removed {
            entry.intent.cancel(&mut self.world.grid);
        }
        count
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Feed `delta_secs` of game time into the fixed-step loop and process
    /// every whole tick it completes.  Returns the number of ticks processed.
    ///
    /// Ignored while paused and for non-positive or NaN deltas.  Real-time
    /// callers multiply their frame delta by [`time_scale`](Self::time_scale)
    /// first, or use [`step_real_time`](Self::step_real_time).
    pub fn advance_time<O: CombatObserver + ?Sized>(
        &mut self,
        delta_secs: f32,
        observer:   &mut O,
    ) -> u64 {
        if self.paused || delta_secs.is_nan() || delta_secs <= 0.0 {
            return 0;
        }
        self.accumulator += delta_secs as f64 * TICKS_PER_SECOND as f64;

        let mut processed = 0;
        while self.accumulator + TICK_EPSILON >= 1.0 {
            self.accumulator -= 1.0;
            self.process_tick(observer);
            self.tick = self.tick + 1;
            processed += 1;
        }
        processed
    }

    /// Advance the slow-motion timer by `real_delta` unscaled seconds and
    /// return the scale now in effect.  Notifies the observer when a window
    /// expires.
    pub fn update_real_time<O: CombatObserver + ?Sized>(
        &mut self,
        real_delta: f32,
        observer:   &mut O,
    ) -> f32 {
        if let Some(slow) = &mut self.slow_motion {
            if slow.elapse(real_delta) {
                self.slow_motion = None;
                debug!("slow motion ended");
                observer.on_time_scale_changed(1.0);
            }
        }
        self.time_scale()
    }

    /// One real-time frame: scale `real_delta` by the current pacing, feed it
    /// to [`advance_time`](Self::advance_time), then count it off the
    /// slow-motion timer.  Returns the number of ticks processed.
    pub fn step_real_time<O: CombatObserver + ?Sized>(
        &mut self,
        real_delta: f32,
        observer:   &mut O,
    ) -> u64 {
        let scale = self.time_scale();
        let ticks = self.advance_time(real_delta * scale, observer);
        self.update_real_time(real_delta, observer);
        ticks
    }

    /// Start (or restart) a slow-motion window.
    pub fn trigger_slow_motion<O: CombatObserver + ?Sized>(
        &mut self,
        scale:     f32,
        real_secs: f32,
        observer:  &mut O,
    ) {
        self.slow_motion = Some(SlowMotion::new(scale, real_secs));
        debug!(scale, real_secs, "slow motion started");
        observer.on_time_scale_changed(scale);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// `current_tick` in seconds.  Steps once per tick.
    #[inline]
    pub fn current_time(&self) -> f32 {
        self.tick.as_secs()
    }

    /// `current_time` plus unconsumed time.  Smooth; for interpolation only.
    pub fn visual_time(&self) -> f32 {
        self.current_time() + (self.accumulator.max(0.0) as f32) * SECONDS_PER_TICK
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Real-time pacing scale: 1 normally, lower during slow motion.
    pub fn time_scale(&self) -> f32 {
        self.slow_motion.map_or(1.0, |slow| slow.scale)
    }

    pub fn slow_motion(&self) -> Option<SlowMotion> {
        self.slow_motion
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The pending queue.
    pub fn queue(&self) -> &IntentQueue {
        &self.queue
    }

    /// Every pending record in firing order.
    pub fn snapshot(&self) -> Vec<ScheduledIntentInfo> {
        self.queue
            .iter()
            .map(|entry| ScheduledIntentInfo {
                id:          entry.id,
                group:       entry.group,
                tick:        entry.tick,
                time:        entry.tick.as_secs(),
                owner:       entry.intent.owner,
                kind:        entry.intent.action_type(),
                description: entry.description.clone(),
            })
            .collect()
    }

    // ── Tick processing ───────────────────────────────────────────────────

    fn process_tick<O: CombatObserver + ?Sized>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);
        self.queue.reset_sequence();

        let mut batch: Vec<CombatIntent> =
            self.queue.drain_due(now).into_iter().map(|entry| entry.intent).collect();
        if batch.is_empty() {
            observer.on_tick_end(now, 0);
            return;
        }

        for intent in &mut batch {
            if !intent.is_cancelled() && !self.world.units.contains(intent.owner) {
                intent.cancel(&mut self.world.grid);
            }
        }

        let report = resolve(now, &mut batch, &mut self.world, &self.config, observer);
        if let Some(request) = report.slow_motion {
            self.trigger_slow_motion(request.scale, request.real_secs, observer);
        }

        let due = batch.len();
        let mut executed = 0;
        let mut ctx = ExecContext {
            tick:     now,
            world:    &mut self.world,
            config:   &self.config,
            observer: &mut *observer,
            queue:    &mut self.queue,
        };
        for intent in batch {
            if intent.is_cancelled() {
                continue;
            }
            self.executor.execute(intent, &mut ctx);
            executed += 1;
        }

        debug!(
            tick = %now, due, executed,
            interactions = report.interactions.len(),
            "tick processed"
        );
        observer.on_tick_end(now, executed);
    }
}

impl<E: IntentExecutor> Drop for BattleTimeline<E> {
    /// Pending move steps hand their reservations back before the world goes.
    fn drop(&mut self) {
        self.clear();
    }
}
