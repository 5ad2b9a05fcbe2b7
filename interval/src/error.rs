//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for interval construction and parsing
///
/// Arithmetic never returns an error; degenerate results are represented by
/// `NaN` or infinite bounds instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The margin passed to a `mid ± margin` constructor was negative
    #[error("margin must be non-negative (got {0})")]
    InvalidMargin(String),

    /// The relative tolerance passed to an epsilon constructor was negative
    #[error("relative epsilon must be non-negative (got {0})")]
    InvalidEpsilon(String),

    /// The text could not be parsed as an interval
    #[error("could not parse interval from {0:?}")]
    ParseError(String),

    /// A bound could not be parsed as a floating-point value
    #[error("could not parse bound: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
