//! Core error type.
//!
//! Tick processing never fails; errors only surface from construction and
//! configuration paths.  Sub-crates define their own enums and wrap
//! `CoreError` where they need to.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
