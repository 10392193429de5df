//! Defines the interpolation algorithm and lookup path variants
//!
//! Provides the [`Algorithm`] enum, naming the batch interpolation modes,
//! and the [`Lookup`] enum, naming the path that resolved a node bracket.

/// Interpolation algorithm variants.
/// - [`Algorithm::Linear`]             linear interpolation, in-range only
/// - [`Algorithm::LinearExtrapolated`] linear interpolation, boundary
///   segments extended past the grid
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Linear,
    LinearExtrapolated,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Linear             => "linear",
            Algorithm::LinearExtrapolated => "linear extrapolated",
        }
    }
}


/// How a bracket was found.
/// - [`Lookup::Cached`]   query fell in the previously cached cell
/// - [`Lookup::Adjacent`] query fell in a neighbouring cell of the cache
/// - [`Lookup::Direct`]   index computed from a uniform grid step
/// - [`Lookup::Search`]   full binary search over the nodes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lookup {
    Cached,
    Adjacent,
    Direct,
    Search,
}

impl Lookup {
    pub fn lookup_name(self) -> &'static str {
        match self {
            Lookup::Cached   => "cached",
            Lookup::Adjacent => "adjacent",
            Lookup::Direct   => "direct",
            Lookup::Search   => "search",
        }
    }
}
impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lookup_name())
    }
}
