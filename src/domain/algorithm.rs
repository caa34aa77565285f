//! Algorithm enum for selecting how a step walks the grid.

use std::str::FromStr;

/// Both strategies read only from the input grid and produce identical output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// One coordinate after another, row-major
    #[default]
    Serial,
    /// Rows mapped in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown algorithm `{s}` (expected serial or parallel)"))
    }
}
