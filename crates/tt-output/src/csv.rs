//! CSV log backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `interactions.csv`
//! - `feedback.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::LogWriter;
use crate::{FeedbackRow, InteractionRow, OutputResult, TickSummaryRow};

/// Writes the combat log to three CSV files.
pub struct CsvWriter {
    summaries:    Writer<File>,
    interactions: Writer<File>,
    feedback:     Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "executed", "interactions"])?;

        let mut interactions = Writer::from_path(dir.join("interactions.csv"))?;
        interactions.write_record(["tick", "kind", "first", "second"])?;

        let mut feedback = Writer::from_path(dir.join("feedback.csv"))?;
        feedback.write_record(["tick", "event", "x", "y", "unit", "value", "duration", "label"])?;

        Ok(Self {
            summaries,
            interactions,
            feedback,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl LogWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.executed.to_string(),
            row.interactions.to_string(),
        ])?;
        Ok(())
    }

    fn write_interaction(&mut self, row: &InteractionRow) -> OutputResult<()> {
        self.interactions.write_record(&[
            row.tick.to_string(),
            row.kind.as_str().to_owned(),
            row.first.to_string(),
            row.second.to_string(),
        ])?;
        Ok(())
    }

    fn write_feedback(&mut self, row: &FeedbackRow) -> OutputResult<()> {
        self.feedback.write_record(&[
            row.tick.to_string(),
            row.event.to_owned(),
            opt(row.at.map(|p| p.x)),
            opt(row.at.map(|p| p.y)),
            opt(row.unit),
            opt(row.value),
            opt(row.duration),
            opt(row.label),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.interactions.flush()?;
        self.feedback.flush()?;
        Ok(())
    }
}
