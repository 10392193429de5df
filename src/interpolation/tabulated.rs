//! Tabulated function on a node grid.
//!
//! Pairs a [`NodeArray`] with one value per node and evaluates
//! `y = w_l * values[l] + w_r * values[r]`, the way response tables
//! combine node weights with their stored data.

use crate::interpolation::config::{non_finite_idx, GridCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::node_array::NodeArray;
use crate::interpolation::traits::Interpolator;


#[derive(Debug, Clone)]
pub struct TabulatedFunction {
    nodes: NodeArray,
    values: Vec<f64>,
}

impl TabulatedFunction {
    /// Nodes may arrive unsorted; values are permuted along with them.
    pub fn new(nodes: &[f64], values: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_cfg(nodes, values, GridCfg::new())
    }

    pub fn with_cfg(nodes: &[f64], values: &[f64], cfg: GridCfg) -> Result<Self, InterpolationError> {
        if nodes.len() != values.len() {
            return Err(InterpolationError::UnequalLength { x_len: nodes.len(), y_len: values.len() });
        }
        if let Some(idx) = non_finite_idx(values) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let mut array = NodeArray::with_cfg(cfg);
        array.set_nodes(nodes)?;

        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].total_cmp(&nodes[b]));
        let values = order.into_iter().map(|i| values[i]).collect();

        Ok(Self { nodes: array, values })
    }

    /// Derivative of the interpolant at `x` (slope of the bracketing segment).
    pub fn gradient(&self, x: f64) -> Result<f64, InterpolationError> {
        let b = self.nodes.lookup(x)?;
        Ok(b.wgt_grad_left * self.values[b.inx_left] + b.wgt_grad_right * self.values[b.inx_right])
    }

    // getters
    pub fn nodes(&self) -> &NodeArray { &self.nodes }
    pub fn values(&self) -> &[f64] { &self.values }
}

impl Interpolator for TabulatedFunction {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let b = self.nodes.lookup(x)?;
        Ok(b.combine(self.values[b.inx_left], self.values[b.inx_right]))
    }
}
