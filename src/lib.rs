//! Node-array interpolation weights.
//!
//! [`interpolation::NodeArray`] turns a sorted grid of nodes into two-point
//! linear weights for any query value; [`interpolation::NodeCursor`] and
//! [`interpolation::TabulatedFunction`] build on it.

pub mod interpolation;
