//! Construction-time errors for grids and piece shapes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("row {row} has bits outside the board: {bits:#06x}")]
    RowOverflow { row: usize, bits: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows or no occupied cells")]
    Empty,
    #[error("shape row {row} has {actual} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("shape is {rows}x{cols}, larger than {max}x{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("piece needs exactly 4 rotation states, got {0}")]
    RotationCount(usize),
    #[error("rotation state {0} is not a clockwise turn of the previous state")]
    InconsistentRotation(usize),
}
