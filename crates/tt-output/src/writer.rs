//! The `LogWriter` trait implemented by log backends.

use crate::{FeedbackRow, InteractionRow, OutputResult, TickSummaryRow};

/// Trait implemented by combat-log backends.
///
/// Errors never reach the timeline: the observer stores the first one and
/// hands it out through [`CombatLogObserver::take_error`][crate::CombatLogObserver::take_error].
pub trait LogWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    fn write_interaction(&mut self, row: &InteractionRow) -> OutputResult<()>;

    fn write_feedback(&mut self, row: &FeedbackRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
