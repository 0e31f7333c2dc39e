//! The success path of an intent that survived arbitration.

use tracing::debug;

use tt_core::{CombatConfig, CombatObserver, IntentId, Tick};
use tt_intent::{CombatIntent, IntentKind};
use tt_physics::resolve_collision;
use tt_unit::World;

use crate::{IntentQueue, ScheduleOptions};

/// What an executor may touch while running one intent.
///
/// Reactions scheduled through the context land in the pending queue with
/// the sequence counter already reset for this tick.  A zero delay targets
/// the current tick, which has already been drained, so the reaction fires
/// on the next processed tick.
pub struct ExecContext<'a, O: CombatObserver + ?Sized> {
    pub tick:     Tick,
    pub world:    &'a mut World,
    pub config:   &'a CombatConfig,
    pub observer: &'a mut O,
    pub(crate) queue: &'a mut IntentQueue,
}

impl<O: CombatObserver + ?Sized> ExecContext<'_, O> {
    pub fn schedule(&mut self, delay_secs: f32, intent: CombatIntent) -> IntentId {
        self.queue.schedule(self.tick, delay_secs, intent, ScheduleOptions::default())
    }

    pub fn schedule_with(
        &mut self,
        delay_secs: f32,
        intent:     CombatIntent,
        opts:       ScheduleOptions,
    ) -> IntentId {
        self.queue.schedule(self.tick, delay_secs, intent, opts)
    }
}

/// Runs the success path of uncancelled intents.
///
/// Takes the intent by value.  An implementation handling move steps must
/// release the step's reservation; dropping a step that still holds one is
/// reported as a leak in debug builds.
pub trait IntentExecutor {
    fn execute<O: CombatObserver + ?Sized>(
        &mut self,
        intent: CombatIntent,
        ctx:    &mut ExecContext<'_, O>,
    );
}

/// The stock success paths.
///
/// | Intent   | Effect                                                      |
/// |----------|-------------------------------------------------------------|
/// | Attack   | `resolve_collision` against every unit in the area          |
/// | MoveStep | release the reservation, relocate if the volume fits        |
/// | Block    | nothing                                                     |
/// | Dodge    | nothing                                                     |
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardExecutor;

impl IntentExecutor for StandardExecutor {
    fn execute<O: CombatObserver + ?Sized>(
        &mut self,
        mut intent: CombatIntent,
        ctx:        &mut ExecContext<'_, O>,
    ) {
        let owner = intent.owner;
        match &mut intent.kind {
            IntentKind::Attack { action } => {
                let Some(unit) = ctx.world.unit(owner) else {
                    return;
                };
                let area = action.affected_cells(unit);
                let targets = ctx.world.grid.units_in_area(&area, Some(owner));
                for target in targets {
                    resolve_collision(
                        &mut *ctx.world,
                        ctx.config,
                        &mut *ctx.observer,
                        owner,
                        target,
                        action,
                    );
                }
            }

            IntentKind::MoveStep(step) => {
                step.release(&mut ctx.world.grid);
                let Some(unit) = ctx.world.unit(owner) else {
                    return;
                };
                let cells = unit.footprint_at(step.to);
                if ctx.world.grid.is_space_occupied(&cells, Some(owner)) {
                    debug!(tick = %ctx.tick, %owner, to = %step.to, "move step blocked");
                } else {
                    ctx.world.relocate(owner, step.to);
                }
            }

            IntentKind::Block | IntentKind::Dodge => {}
        }
    }
}
