//! All kinds of errors in this crate.

use crate::cells::Position;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// The {0} of the board is out of range.
    InvalidDimension(&'static str),
    /// Position {0} is out of the board.
    PositionOutOfRange(Position),
    /// Invalid rule description: {0:?}.
    InvalidRuleDescription(String),
    /// The operation was cancelled.
    OperationCancelled,
    /// Position {0} is set both alive and dead.
    ConflictingChange(Position),
    /// No life is possible at {0}.
    UninhabitableCell(Position),
    /// Soup density should be between 0 and 1, got {0}.
    InvalidDensity(f64),
    /// Unable to start the worker pool: {0}.
    WorkerPool(String),
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
