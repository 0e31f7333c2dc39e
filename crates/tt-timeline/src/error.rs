use thiserror::Error;
use tt_core::CoreError;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type TimelineResult<T> = Result<T, TimelineError>;
