//! Strict-validation error type.
//!
//! The engine itself never fails on a malformed grid.  These errors are only
//! produced by the opt-in checks ([`Grid::validate`][crate::Grid::validate],
//! [`SimConfig::validate`][crate::SimConfig::validate]).  Downstream crates
//! wrap `GridError` as one variant of their own error enums.

use thiserror::Error;

use crate::Position;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("unknown cell symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Position },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for strict validation.
pub type GridResult<T> = Result<T, GridError>;
