//! Defines the struct returned by batch interpolation.
//!
//! The report summarizes the algorithm used, the number of data and
//! evaluation points, the interpolated values, and how the node lookups
//! were resolved.

use crate::interpolation::algorithms::{Algorithm, Lookup};

/// Number of queries resolved by each [`Lookup`] path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupCounts {
    pub cached: usize,
    pub adjacent: usize,
    pub direct: usize,
    pub search: usize,
}

impl LookupCounts {
    pub(crate) fn record(&mut self, lookup: Lookup) {
        match lookup {
            Lookup::Cached   => self.cached   += 1,
            Lookup::Adjacent => self.adjacent += 1,
            Lookup::Direct   => self.direct   += 1,
            Lookup::Search   => self.search   += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.cached + self.adjacent + self.direct + self.search
    }
}

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"linear"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
/// - `lookups`        : per-path bracket lookup counts
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub lookups: LookupCounts,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
            lookups: LookupCounts::default(),
        }
    }
}
