//! Observer trait for tick progress and arbitration outcomes.

use crate::{Feedback, InteractionKind, Tick, UnitId};

/// Callbacks invoked by the timeline, arbiter and impact resolver.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  No return value is ever consumed; the
/// core's behaviour is identical whichever observer is plugged in.
///
/// # Example: interaction printer
///
/// ```rust,ignore
/// struct PrintInteractions;
///
/// impl CombatObserver for PrintInteractions {
///     fn on_interaction(&mut self, tick: Tick, kind: InteractionKind, a: UnitId, b: UnitId) {
///         println!("{tick}: {kind} between {a} and {b}");
///     }
/// }
/// ```
pub trait CombatObserver {
    /// Called before a tick's due intents are dequeued.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's surviving intents have executed.
    ///
    /// `executed` counts intents whose success path ran.
    fn on_tick_end(&mut self, _tick: Tick, _executed: usize) {}

    /// A pair of intents was resolved by the arbiter.  For one-sided kinds
    /// `first` is the attacker.
    fn on_interaction(
        &mut self,
        _tick:   Tick,
        _kind:   InteractionKind,
        _first:  UnitId,
        _second: UnitId,
    ) {}

    /// Presentation hook (status text, damage number, shake, hit-stop).
    fn on_feedback(&mut self, _feedback: &Feedback) {}

    /// A successful dodge invites `unit` to submit a counter move.
    fn on_counter_move_requested(&mut self, _unit: UnitId) {}

    /// The real-time pacing scale changed (slow motion started or ended).
    fn on_time_scale_changed(&mut self, _scale: f32) {}
}

/// A [`CombatObserver`] that does nothing.
pub struct NoopObserver;

impl CombatObserver for NoopObserver {}
