//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
//! over a batch of evaluation points.
//!
//! The `x` data become a [`NodeArray`] and the evaluation points are swept
//! through one [`NodeCursor`], so sorted evaluation points mostly reuse the
//! previous bracket. Evaluation points outside `[x[0], x[-1]]` are either
//! rejected or extrapolated from the boundary segment.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_spacing, non_finite_idx, CommonCfg, GridCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::node_array::NodeArray;
use crate::interpolation::report::InterpolationReport;


/// Linear interpolation configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `extrapolate` : extend the boundary segments past the data range
///
/// # Construction
/// - Use [`LinearCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between consecutive `x`;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - `extrapolate = false`
#[derive(Debug, Clone, Copy)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
    extrapolate: bool,
}

impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), extrapolate: false }
    }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        check_spacing(v, self.common.x_min_spacing())?;

        self.common.with_x(v);

        // length agreement check
        // symmetric with set_y
        let y_len = self.common.y().len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let x_len = self.common.x().len();
        let y_len = v.len();
        if x_len != 0 && y_len != x_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }

        self.common.with_y(v);
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.common.with_x_eval(v);
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.common.with_x_min_spacing(v);
        Ok(self)
    }

    pub fn set_extrapolate(mut self, v: bool) -> Self {
        self.extrapolate = v;
        self
    }

    pub fn extrapolate(&self) -> bool { self.extrapolate }
}

impl Default for LinearCfg<'_> {
    fn default() -> Self { Self::new() }
}


/// Performs linear interpolation over the data in [`CommonCfg`].
///
/// # Behavior
/// For each evaluation point `xq` in `cfg.common.x_eval()`, the cursor
/// locates the segment `[x[i], x[i+1]]` and computes
///
/// ```text
/// yq = w_l * y[i] + w_r * y[i+1]
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"linear"` or `"linear extrapolated"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
/// - `lookups`        : how each bracket was found
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`]
///   or [`InterpolationError::InsufficientPoints`] if `x`/`y` were not set
///   consistently.
/// - [`InterpolationError::OutOfBounds`] if extrapolation is off and any
///   evaluation point lies outside the provided x-range.
pub fn interpolate(cfg: LinearCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let algorithm = if cfg.extrapolate { Algorithm::LinearExtrapolated } else { Algorithm::Linear };
    let mut report = InterpolationReport::new(algorithm, n_provided, n_evaluated);
    report.evaluated.reserve(n_evaluated);

    let grid_cfg = GridCfg::new().set_min_spacing(cfg.common.x_min_spacing())?;
    let mut array = NodeArray::with_cfg(grid_cfg);
    array.set_nodes(x)?;
    let mut cursor = array.cursor();

    let x_min = x[0];
    let x_max = x[n_provided - 1];
    for &xq in evals {
        // domain check
        if !cfg.extrapolate && (xq < x_min || xq > x_max) {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max
            });
        }

        let yq = cursor.interpolate(xq, y)?;
        if let Some(b) = cursor.bracket() {
            report.lookups.record(b.lookup);
        }
        report.evaluated.push(yq);
    }

    Ok(report)
}
