//! Errors raised while generating or querying a floor

use thiserror::Error;

use crate::grid::Coordinate;

/// Errors that can abort floor generation.
///
/// Generation either completes or fails with one of these; a failed run
/// never hands back a partially built level.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    /// The configuration makes a required random range empty or breaks a
    /// structural precondition (for example a room grid with a single cell).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A read or write landed outside the floor rectangle. This points at a
    /// generation defect rather than bad input.
    #[error("Coordinate {0} is outside the floor")]
    OutOfBounds(Coordinate),
}

impl LevelError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LevelError::InvalidConfig(reason.into())
    }
}

pub type LevelResult<T> = Result<T, LevelError>;
