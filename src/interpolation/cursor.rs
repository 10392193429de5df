//! Stateful cursor over a shared [`NodeArray`].
//!
//! A [`NodeCursor`] borrows its grid immutably and owns the cached bracket,
//! so one grid can serve many cursors (one per thread or per sweep) while
//! the grid itself cannot be replaced underneath them.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::node_array::{check_values, impl_bracket_accessors, locate, Bracket, NodeArray};


#[derive(Debug, Clone)]
pub struct NodeCursor<'a> {
    array: &'a NodeArray,
    last: Option<Bracket>,
}

impl<'a> NodeCursor<'a> {
    pub fn new(array: &'a NodeArray) -> Self {
        Self { array, last: None }
    }

    /// Locates `x`, reusing the previous bracket when possible.
    pub fn set_value(&mut self, x: f64) -> Result<(), InterpolationError> {
        let bracket = locate(self.array.nodes(), self.array.spacing(), self.last.as_ref(), x)?;
        self.last = Some(bracket);
        Ok(())
    }

    /// Forgets the cached bracket.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn interpolate(&mut self, x: f64, values: &[f64]) -> Result<f64, InterpolationError> {
        check_values(self.array.len(), values)?;
        self.set_value(x)?;
        let b = self.current()?;
        Ok(b.combine(values[b.inx_left], values[b.inx_right]))
    }

    pub fn array(&self) -> &'a NodeArray { self.array }
}
impl_bracket_accessors!(NodeCursor<'_>);
