use thiserror::Error;
use tt_core::GridPoint;

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("{field} must be {expected}, got {value}")]
    InvalidAttribute {
        field:    &'static str,
        expected: &'static str,
        value:    f32,
    },

    #[error("position {0} is not a lattice vertex")]
    InvalidPosition(GridPoint),

    #[error("unit volume covers no cells")]
    EmptyVolume,
}

pub type UnitResult<T> = Result<T, UnitError>;
