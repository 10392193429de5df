//! Interpolation error types.
//!
//! ┌ grid errors    : raised while a node grid is assigned
//! │   ├ too few nodes, duplicate nodes, non-finite nodes
//! │   └ invalid grid ranges for generated grids
//! ├ query errors   : raised while a query is resolved
//! │   ├ non-finite query value, no grid set
//! │   └ accessor used before any query
//! └ config errors  : invalid tolerances, mismatched tabulated data

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite query value {got}")]
    NonFiniteValue { got: f64 },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("node array is empty, set nodes before querying")]
    EmptyGrid,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate node values detected: {x1} and {x2}")]
    DuplicateNode { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid linear_tol {got} must be finite and >= 0")]
    InvalidLinearTol { got: f64 },

    #[error("invalid grid range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("no value has been set, call set_value first")]
    NoQuery,
}
