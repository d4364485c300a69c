//! Typed errors for board construction and method registration

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    EmptyBoard { height: usize, width: usize },

    #[error("board shape mismatch: {expected_height}x{expected_width} vs {actual_height}x{actual_width}")]
    ShapeMismatch {
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },

    #[error("density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("invalid method name {0:?}")]
    InvalidMethodName(String),

    #[error("method {0:?} is already registered")]
    DuplicateMethod(String),

    #[error("no method registered under {0:?}")]
    UnknownMethod(String),
}
