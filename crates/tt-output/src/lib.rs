//! `tt-output`: combat log writers for the tri_tactics combat core.
//!
//! [`CombatLogObserver`] implements `tt_core::CombatObserver` and forwards
//! every tick summary, arbitrated interaction and feedback event to a
//! [`LogWriter`].  The stock backend is [`CsvWriter`]:
//!
//! | File                 | One row per                                    |
//! |----------------------|------------------------------------------------|
//! | `tick_summaries.csv` | tick that executed or arbitrated something     |
//! | `interactions.csv`   | Clash / Parry / Dodge / Intercept / Escape     |
//! | `feedback.csv`       | presentation event, counter-move, time scale   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CombatLogObserver, CsvWriter};
//!
//! let mut log = CombatLogObserver::new(CsvWriter::new(Path::new("./log"))?);
//! timeline.advance_time(10.0, &mut log);
//! log.finish()?;
//! if let Some(e) = log.take_error() { eprintln!("log error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CombatLogObserver;
pub use row::{FeedbackRow, InteractionRow, TickSummaryRow};
pub use writer::LogWriter;
