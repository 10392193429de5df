//! Node Array
//!
//! Converts a one-dimensional grid of reference values ("nodes") into
//! two-point [linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
//! weights for arbitrary query values.
//!
//! For a query `x` the bracket `(l, r = l + 1)` is the largest `l` with
//! `nodes[l] <= x`, clamped to `[0, len - 2]`, and
//!
//! ```text
//! w_l = (nodes[r] - x) / (nodes[r] - nodes[l])
//! w_r = 1 - w_l
//! ```
//!
//! Above the last node `w_r` is computed first and `w_l = 1 - w_r`, so the
//! weights sum to exactly `1.0` whenever `|w| < 2^53`.
//!
//! Queries outside `[nodes[0], nodes[len - 1]]` use the boundary-most pair,
//! which extrapolates linearly (one weight negative, the other above 1).
//!
//! [`NodeArray::lookup`] searches fresh every call. [`NodeArray::set_value`]
//! caches the bracket and tries, in order, the cached cell, its neighbours,
//! a direct index on uniform grids, and finally a binary search.


use tracing::{debug, trace};
use crate::interpolation::algorithms::Lookup;
use crate::interpolation::config::{check_spacing, non_finite_idx, GridCfg};
use crate::interpolation::cursor::NodeCursor;
use crate::interpolation::errors::InterpolationError;


/// Bracketing node pair and linear weights for one query value.
///
/// [`Bracket`]
/// - `value`          : the query value
/// - `inx_left`       : index of the left node
/// - `inx_right`      : index of the right node (`inx_left + 1`)
/// - `wgt_left`       : weight of the left node
/// - `wgt_right`      : weight of the right node; `wgt_left + wgt_right == 1`
/// - `wgt_grad_left`  : `d wgt_left / dx`
/// - `wgt_grad_right` : `d wgt_right / dx`
/// - `lookup`         : path that resolved the bracket ([`Lookup`])
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    pub value: f64,
    pub inx_left: usize,
    pub inx_right: usize,
    pub wgt_left: f64,
    pub wgt_right: f64,
    pub wgt_grad_left: f64,
    pub wgt_grad_right: f64,
    pub lookup: Lookup,
}

impl Bracket {
    fn new(nodes: &[f64], inx_left: usize, x: f64, lookup: Lookup) -> Self {
        let inx_right = inx_left + 1;
        let dx = nodes[inx_right] - nodes[inx_left];

        // `1 - w` is exact for w >= 1
        let (wgt_left, wgt_right) = if x > nodes[inx_right] {
            let wgt_right = (x - nodes[inx_left]) / dx;
            (1.0 - wgt_right, wgt_right)
        } else {
            let wgt_left = (nodes[inx_right] - x) / dx;
            (wgt_left, 1.0 - wgt_left)
        };
        let wgt_grad_right = 1.0 / dx;

        Self {
            value: x,
            inx_left,
            inx_right,
            wgt_left,
            wgt_right,
            wgt_grad_left: -wgt_grad_right,
            wgt_grad_right,
            lookup,
        }
    }

    /// Weighted sum of the values tabulated at the left and right node.
    #[inline]
    pub fn combine(&self, left: f64, right: f64) -> f64 {
        self.wgt_left * left + self.wgt_right * right
    }

    /// Same indices and weights, ignoring which path found them.
    pub fn same_cell(&self, other: &Bracket) -> bool {
        self.inx_left == other.inx_left
            && self.inx_right == other.inx_right
            && self.wgt_left == other.wgt_left
            && self.wgt_right == other.wgt_right
    }
}


/// Node grid layout, detected on assignment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Spacing {
    Uniform { step: f64 },
    Irregular,
}

impl Spacing {
    fn detect(nodes: &[f64], linear_tol: f64) -> Self {
        let n = nodes.len();
        let step = (nodes[n - 1] - nodes[0]) / (n - 1) as f64;
        let tol = linear_tol * step.abs();

        let uniform = nodes
            .windows(2)
            .all(|w| ((w[1] - w[0]) - step).abs() <= tol);

        if uniform { Spacing::Uniform { step } } else { Spacing::Irregular }
    }
}


/// Largest `i` in `[0, n - 2]` with `x[i] <= xq`, or `0` below the grid.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Whether cell `l` owns `xq`: `[x[l], x[l+1])`, open-ended at both
/// boundary cells, matching [`find_interval`].
#[inline]
fn cell_contains(x: &[f64], l: usize, xq: f64) -> bool {
    let n = x.len();
    let above = l == 0 || x[l] <= xq;
    let below = l + 2 == n || xq < x[l + 1];
    above && below
}

fn direct_interval(x: &[f64], step: f64, xq: f64) -> usize {
    let n = x.len();
    let raw = ((xq - x[0]) / step).floor();
    let mut i = if raw <= 0.0 {
        0
    } else if raw >= (n - 2) as f64 {
        n - 2
    } else {
        raw as usize
    };

    // rounding in the division can land one cell off
    while i > 0 && x[i] > xq { i -= 1; }
    while i + 2 < n && x[i + 1] <= xq { i += 1; }

    i
}

/// Resolves the bracket for `xq`, starting from `hint` when given.
pub(crate) fn locate(
    nodes: &[f64],
    spacing: Spacing,
    hint: Option<&Bracket>,
    xq: f64,
) -> Result<Bracket, InterpolationError> {
    if !xq.is_finite() {
        return Err(InterpolationError::NonFiniteValue { got: xq });
    }
    if nodes.len() < 2 {
        return Err(InterpolationError::EmptyGrid);
    }

    if let Some(last) = hint {
        let l = last.inx_left;
        if cell_contains(nodes, l, xq) {
            return Ok(Bracket::new(nodes, l, xq, Lookup::Cached));
        }
        if l > 0 && cell_contains(nodes, l - 1, xq) {
            return Ok(Bracket::new(nodes, l - 1, xq, Lookup::Adjacent));
        }
        if l + 2 < nodes.len() && cell_contains(nodes, l + 1, xq) {
            return Ok(Bracket::new(nodes, l + 1, xq, Lookup::Adjacent));
        }
    }

    match spacing {
        Spacing::Uniform { step } => {
            let l = direct_interval(nodes, step, xq);
            Ok(Bracket::new(nodes, l, xq, Lookup::Direct))
        }
        Spacing::Irregular => {
            let l = find_interval(nodes, xq);
            trace!(value = xq, inx_left = l, "binary search over node array");
            Ok(Bracket::new(nodes, l, xq, Lookup::Search))
        }
    }
}


/// Bracket and weight accessors shared by [`NodeArray`] and [`NodeCursor`].
///
/// Each accessor returns [`InterpolationError::NoQuery`] until the first
/// successful `set_value`.
macro_rules! impl_bracket_accessors {
    ($ty:ty) => {
        impl $ty {
            /// Most recently computed bracket, if any.
            pub fn bracket(&self) -> Option<&$crate::interpolation::node_array::Bracket> {
                self.last.as_ref()
            }

            fn current(
                &self,
            ) -> Result<&$crate::interpolation::node_array::Bracket, $crate::interpolation::errors::InterpolationError> {
                self.last
                    .as_ref()
                    .ok_or($crate::interpolation::errors::InterpolationError::NoQuery)
            }

            pub fn inx_left(&self) -> Result<usize, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.inx_left)
            }
            pub fn inx_right(&self) -> Result<usize, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.inx_right)
            }
            pub fn wgt_left(&self) -> Result<f64, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.wgt_left)
            }
            pub fn wgt_right(&self) -> Result<f64, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.wgt_right)
            }
            pub fn wgt_grad_left(&self) -> Result<f64, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.wgt_grad_left)
            }
            pub fn wgt_grad_right(&self) -> Result<f64, $crate::interpolation::errors::InterpolationError> {
                Ok(self.current()?.wgt_grad_right)
            }
        }
    };
}
pub(crate) use impl_bracket_accessors;


/// Sorted, duplicate-free node grid with a cached query bracket.
///
/// # Construction
/// - [`NodeArray::new`] (empty) then [`NodeArray::set_nodes`]
/// - [`NodeArray::from_nodes`], [`NodeArray::linear`], [`NodeArray::logarithmic`]
/// - [`NodeArray::with_cfg`] for a non-default [`GridCfg`]
///
/// # Grid policy
/// - fewer than 2 nodes : [`InterpolationError::InsufficientPoints`]
/// - non-finite node    : [`InterpolationError::NonFiniteVec`]
/// - unsorted input     : sorted ascending
/// - nodes closer than [`GridCfg::min_spacing`] : [`InterpolationError::DuplicateNode`]
///
/// # Queries
/// Non-finite query values fail fast with
/// [`InterpolationError::NonFiniteValue`] and leave the cache untouched.
#[derive(Debug, Clone)]
pub struct NodeArray {
    nodes: Vec<f64>,
    spacing: Spacing,
    cfg: GridCfg,
    last: Option<Bracket>,
}

impl NodeArray {
    pub fn new() -> Self {
        Self::with_cfg(GridCfg::new())
    }

    pub fn with_cfg(cfg: GridCfg) -> Self {
        Self {
            nodes: Vec::new(),
            spacing: Spacing::Irregular,
            cfg,
            last: None,
        }
    }

    pub fn from_nodes(values: &[f64]) -> Result<Self, InterpolationError> {
        let mut array = Self::new();
        array.set_nodes(values)?;
        Ok(array)
    }

    /// `n` equally spaced nodes from `min` to `max` inclusive.
    pub fn linear(min: f64, max: f64, n: usize) -> Result<Self, InterpolationError> {
        check_range(min, max, n)?;

        let step = (max - min) / (n - 1) as f64;
        let mut nodes: Vec<f64> = (0..n).map(|i| min + i as f64 * step).collect();
        nodes[n - 1] = max;

        Self::from_nodes(&nodes)
    }

    /// `n` logarithmically spaced nodes from `min` to `max` inclusive, `min > 0`.
    pub fn logarithmic(min: f64, max: f64, n: usize) -> Result<Self, InterpolationError> {
        check_range(min, max, n)?;
        if min <= 0.0 {
            return Err(InterpolationError::InvalidRange { min, max });
        }

        let (log_min, log_max) = (min.ln(), max.ln());
        let step = (log_max - log_min) / (n - 1) as f64;
        let mut nodes: Vec<f64> = (0..n).map(|i| (log_min + i as f64 * step).exp()).collect();
        nodes[0] = min;
        nodes[n - 1] = max;

        Self::from_nodes(&nodes)
    }

    /// Replaces the whole node grid and clears the cached bracket.
    ///
    /// On error the previous grid and cache are kept.
    pub fn set_nodes(&mut self, values: &[f64]) -> Result<(), InterpolationError> {
        if values.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: values.len() });
        }
        if let Some(idx) = non_finite_idx(values) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        check_spacing(&sorted, self.cfg.min_spacing())?;

        self.spacing = Spacing::detect(&sorted, self.cfg.linear_tol());
        self.nodes = sorted;
        self.last = None;

        debug!(
            n_nodes = self.nodes.len(),
            uniform = self.is_uniform(),
            "node array replaced"
        );
        Ok(())
    }

    /// Locates `x` and caches the bracket for the accessors.
    pub fn set_value(&mut self, x: f64) -> Result<(), InterpolationError> {
        let bracket = locate(&self.nodes, self.spacing, self.last.as_ref(), x)?;
        self.last = Some(bracket);
        Ok(())
    }

    /// Fresh bracket for `x`, without reading or writing the cache.
    pub fn lookup(&self, x: f64) -> Result<Bracket, InterpolationError> {
        locate(&self.nodes, self.spacing, None, x)
    }

    /// Interpolates `values` (tabulated on the nodes) at `x`.
    pub fn interpolate(&mut self, x: f64, values: &[f64]) -> Result<f64, InterpolationError> {
        check_values(self.nodes.len(), values)?;
        self.set_value(x)?;
        let b = self.current()?;
        Ok(b.combine(values[b.inx_left], values[b.inx_right]))
    }

    /// Independent cursor over this grid with its own cache.
    pub fn cursor(&self) -> NodeCursor<'_> {
        NodeCursor::new(self)
    }

    // getters
    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn spacing(&self) -> Spacing { self.spacing }
    pub fn cfg(&self) -> GridCfg { self.cfg }
    pub fn is_uniform(&self) -> bool { matches!(self.spacing, Spacing::Uniform { .. }) }
}
impl_bracket_accessors!(NodeArray);

impl Default for NodeArray {
    fn default() -> Self { Self::new() }
}


fn check_range(min: f64, max: f64, n: usize) -> Result<(), InterpolationError> {
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n });
    }
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(InterpolationError::InvalidRange { min, max });
    }
    Ok(())
}

pub(crate) fn check_values(n_nodes: usize, values: &[f64]) -> Result<(), InterpolationError> {
    if n_nodes == 0 {
        return Err(InterpolationError::EmptyGrid);
    }
    if values.len() != n_nodes {
        return Err(InterpolationError::UnequalLength { x_len: n_nodes, y_len: values.len() });
    }
    Ok(())
}
