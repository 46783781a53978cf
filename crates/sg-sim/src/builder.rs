//! Fluent builder for constructing a [`Sim`].

use sg_core::{CellChooser, Grid, SimConfig, SimRng};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — threshold, seed, optional iteration cap
/// - [`Grid`] — the initial grid, moved into the runner
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                    |
/// |-----------------|--------------------------------------------|
/// | `.chooser(c)`   | `SimRng::new(config.seed)`                 |
/// | `.strict(true)` | off — malformed grids are simulated as-is  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(0.3, 7), grid)
///     .strict(true)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<C: CellChooser = SimRng> {
    config:  SimConfig,
    grid:    Grid,
    chooser: C,
    strict:  bool,
}

impl SimBuilder<SimRng> {
    /// Create a builder whose chooser is seeded from `config.seed`.
    pub fn new(config: SimConfig, grid: Grid) -> Self {
        let chooser = SimRng::new(config.seed);
        Self { config, grid, chooser, strict: false }
    }
}

impl<C: CellChooser> SimBuilder<C> {
    /// Replace the destination chooser (e.g. a `ScriptedChooser` in tests).
    pub fn chooser<D: CellChooser>(self, chooser: D) -> SimBuilder<D> {
        SimBuilder {
            config: self.config,
            grid:   self.grid,
            chooser,
            strict: self.strict,
        }
    }

    /// Validate the grid and threshold at [`build`][Self::build] time.
    ///
    /// Off by default: the engine tolerates ragged grids, unknown symbols,
    /// and out-of-range thresholds.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run the optional strict checks and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C>> {
        if self.strict {
            self.grid.validate()?;
            self.config.validate()?;
        }

        Ok(Sim {
            config:  self.config,
            grid:    self.grid,
            chooser: self.chooser,
        })
    }
}
