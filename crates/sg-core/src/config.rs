//! Simulation configuration.

use crate::{Grid, GridError, GridResult};

/// Top-level simulation configuration.
///
/// Typically assembled by the application crate from command-line arguments
/// and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Minimum fraction of same-type neighbors (among non-empty neighbors)
    /// an agent needs to be satisfied.  Nominally in `[0, 1]`; values
    /// outside that range are accepted unless the strict path is used.
    pub threshold: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Replaces the natural iteration cap (`row_count * column_count`).
    /// `None` keeps the natural cap.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_iterations: Option<u64>,
}

impl SimConfig {
    pub fn new(threshold: f64, seed: u64) -> Self {
        Self { threshold, seed, max_iterations: None }
    }

    /// Number of relocation passes the driver may run on `grid`.
    #[inline]
    pub fn iteration_cap(&self, grid: &Grid) -> u64 {
        self.max_iterations.unwrap_or(grid.area() as u64)
    }

    /// Reject thresholds that are not finite or lie outside `[0, 1]`.
    pub fn validate(&self) -> GridResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(GridError::Config(format!(
                "similarity threshold {} must be a finite value in [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(0.5, 42)
    }
}
