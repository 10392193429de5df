//! Shared configuration for node grids and batch interpolation.
//!
//! [`GridCfg`] — node grid fields
//! - `min_spacing` : smallest gap allowed between adjacent nodes;
//!                   closer nodes are rejected as duplicates
//! - `linear_tol`  : relative tolerance under which all gaps count as equal,
//!                   enabling direct index computation
//!
//! [`CommonCfg`] — batch interpolation fields
//! - `x`      : x values provided
//! - `y`      : y values provided
//! - `x_eval` : x values to evaluate
//! - `x_min_spacing` : minimum spacing between adjacent `x`
//!
//! Both start from the defaults [`DEFAULT_X_TOL`] and [`DEFAULT_LINEAR_TOL`].


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;
pub const DEFAULT_LINEAR_TOL: f64 = 1e-10;


/// Node grid configuration.
///
/// # Construction
/// - Use [`GridCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridCfg {
    min_spacing: f64,
    linear_tol: f64,
}

impl GridCfg {
    pub fn new() -> Self {
        Self {
            min_spacing: DEFAULT_X_TOL,
            linear_tol: DEFAULT_LINEAR_TOL,
        }
    }

    pub fn set_min_spacing(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.min_spacing = v;
        Ok(self)
    }

    /// `0.0` disables uniform-grid detection except for exactly equal gaps.
    pub fn set_linear_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(InterpolationError::InvalidLinearTol { got: v });
        }
        self.linear_tol = v;
        Ok(self)
    }

    // getters
    pub fn min_spacing(&self) -> f64 { self.min_spacing }
    pub fn linear_tol(&self)  -> f64 { self.linear_tol }
}

impl Default for GridCfg {
    fn default() -> Self { Self::new() }
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Checks an ascending sequence for gaps below `min_spacing`.
///
/// Returns [`InterpolationError::DuplicateNode`] for the first pair that is
/// too close and [`InterpolationError::NonIncreasingX`] for a descent.
/// A span that overflows `f64` is [`InterpolationError::InvalidRange`].
pub(crate) fn check_spacing(v: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    if let (Some(&min), Some(&max)) = (v.first(), v.last()) {
        if !(max - min).is_finite() {
            return Err(InterpolationError::InvalidRange { min, max });
        }
    }
    for i in 1..v.len() {
        if (v[i] - v[i - 1]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateNode {
                x1: v[i - 1],
                x2: v[i],
            });
        }
        if v[i] <= v[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}
