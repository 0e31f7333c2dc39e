//! `CombatLogObserver<W>`: bridges `CombatObserver` to a `LogWriter`.

use tracing::warn;

use tt_core::{CombatObserver, Feedback, InteractionKind, Tick, UnitId};

use crate::row::{FeedbackRow, InteractionRow, TickSummaryRow};
use crate::writer::LogWriter;
use crate::{OutputError, OutputResult};

/// A [`CombatObserver`] that writes tick summaries, interactions and
/// feedback to any [`LogWriter`] backend.
///
/// Observer hooks have no return value, so write errors are stored and
/// retrieved with [`take_error`][Self::take_error].  Only the first error is
/// kept.
pub struct CombatLogObserver<W: LogWriter> {
    writer:       W,
    /// Tick currently being processed; feedback is stamped with it.
    tick:         Tick,
    interactions: u64,
    last_error:   Option<OutputError>,
}

impl<W: LogWriter> CombatLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tick:         Tick::ZERO,
            interactions: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Call once the battle is over.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "combat log write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: LogWriter> CombatObserver for CombatLogObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick = tick;
        self.interactions = 0;
    }

    fn on_tick_end(&mut self, tick: Tick, executed: usize) {
        if executed == 0 && self.interactions == 0 {
            return;
        }
        let row = TickSummaryRow {
            tick:         tick.0,
            executed:     executed as u64,
            interactions: self.interactions,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_interaction(&mut self, tick: Tick, kind: InteractionKind, first: UnitId, second: UnitId) {
        self.interactions += 1;
        let row = InteractionRow { tick: tick.0, kind, first, second };
        let result = self.writer.write_interaction(&row);
        self.store_err(result);
    }

    fn on_feedback(&mut self, feedback: &Feedback) {
        let row = FeedbackRow::from_feedback(self.tick.0, feedback);
        let result = self.writer.write_feedback(&row);
        self.store_err(result);
    }

    fn on_counter_move_requested(&mut self, unit: UnitId) {
        let row = FeedbackRow::counter_move(self.tick.0, unit);
        let result = self.writer.write_feedback(&row);
        self.store_err(result);
    }

    fn on_time_scale_changed(&mut self, scale: f32) {
        let row = FeedbackRow::time_scale(self.tick.0, scale);
        let result = self.writer.write_feedback(&row);
        self.store_err(result);
    }
}
