//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so a bad mask surfaces unchanged through the fleet builder.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("mask dimensions must be non-zero, got {width}x{height}")]
    EmptyMask { width: usize, height: usize },

    #[error("mask is {width}x{height} but {cells} cells were supplied")]
    MaskShape {
        width:  usize,
        height: usize,
        cells:  usize,
    },

    #[error("mask row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row:      usize,
        got:      usize,
        expected: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `park-core`.
pub type CoreResult<T> = Result<T, CoreError>;
