//! Errors raised when a grid is built or addressed with bad input.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Both dimensions must be at least one.
    #[error("invalid grid dimensions {rows}x{cols}, both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cannot place {requested} alive cells on a grid of {capacity} cells")]
    TooManyAliveCells { requested: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
