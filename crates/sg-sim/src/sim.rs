//! The iteration driver: [`simulate`] and the [`Sim`] runner.

use sg_core::{CellChooser, Grid, Position, SimConfig};
use tracing::{debug, info};

use crate::satisfaction::unsatisfied_positions;
use crate::{NoopObserver, SimObserver, index_of_dissimilarity, relocate};

// ── Run outcome ───────────────────────────────────────────────────────────────

/// Why the driver stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A scan found no unsatisfied agent (or the grid has no cells).
    Converged,
    /// The iteration cap was reached.  The grid holds whatever the last pass
    /// produced; this is not an error.
    Exhausted,
}

/// Summary of one driver run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimOutcome {
    pub termination: Termination,
    /// Iterations that applied relocations.  On convergence this is also
    /// the index of the iteration whose scan came back empty.
    pub relocation_passes: u64,
    /// Successful relocations across all passes.
    pub moves: u64,
    /// Relocation attempts that found no empty cell.
    pub stalled_moves: u64,
}

impl SimOutcome {
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Per-iteration tallies handed to [`SimObserver::on_iteration_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    pub iteration:   u64,
    /// Size of this iteration's unsatisfied snapshot.
    pub unsatisfied: usize,
    pub moved:       usize,
    pub stalled:     usize,
}

// ── Free-function driver ──────────────────────────────────────────────────────

/// Run the simulation on `grid` in place with the natural iteration cap
/// (`row_count * column_count`).
pub fn simulate<C>(grid: &mut Grid, threshold: f64, chooser: &mut C) -> SimOutcome
where
    C: CellChooser + ?Sized,
{
    let cap = grid.area() as u64;
    drive(grid, threshold, cap, chooser, &mut NoopObserver)
}

/// Shared loop behind [`simulate`] and [`Sim::run`].
pub(crate) fn drive<C, O>(
    grid:      &mut Grid,
    threshold: f64,
    cap:       u64,
    chooser:   &mut C,
    observer:  &mut O,
) -> SimOutcome
where
    C: CellChooser + ?Sized,
    O: SimObserver + ?Sized,
{
    let mut outcome = SimOutcome {
        termination:       Termination::Exhausted,
        relocation_passes: 0,
        moves:             0,
        stalled_moves:     0,
    };

    for iteration in 0..cap {
        observer.on_iteration_start(iteration);

        // ── Scan: snapshot of unsatisfied positions ───────────────────────
        let unsatisfied = unsatisfied_positions(grid, threshold);
        observer.on_unsatisfied(iteration, &unsatisfied);

        let mut stats = IterationStats {
            iteration,
            unsatisfied: unsatisfied.len(),
            ..IterationStats::default()
        };

        if unsatisfied.is_empty() {
            outcome.termination = Termination::Converged;
            observer.on_iteration_end(&stats, grid);
            break;
        }

        // ── Relocate: snapshot order, live grid ───────────────────────────
        for &from in &unsatisfied {
            let to = relocate(grid, from, chooser);
            match to {
                Some(_) => stats.moved += 1,
                None    => stats.stalled += 1,
            }
            observer.on_move(iteration, from, to);
        }

        outcome.relocation_passes += 1;
        outcome.moves += stats.moved as u64;
        outcome.stalled_moves += stats.stalled as u64;

        debug!(
            iteration,
            unsatisfied = stats.unsatisfied,
            moved = stats.moved,
            stalled = stats.stalled,
            "relocation pass complete",
        );
        observer.on_iteration_end(&stats, grid);
    }

    // A grid with no cells has nothing to scan and is trivially settled.
    if grid.area() == 0 {
        outcome.termination = Termination::Converged;
    }

    info!(
        termination = ?outcome.termination,
        passes = outcome.relocation_passes,
        moves = outcome.moves,
        stalled = outcome.stalled_moves,
        "simulation finished",
    );
    observer.on_sim_end(&outcome, grid);
    outcome
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<C>` owns the live grid and the destination chooser.  The grid is
/// never copied: read it between runs (e.g. [`Sim::dissimilarity`]) but not
/// during one.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: CellChooser> {
    /// Threshold, seed, and optional iteration-cap override.
    pub config: SimConfig,

    /// The grid being simulated.  Mutated in place by [`Sim::run`].
    pub grid: Grid,

    /// Source of destination choices for relocations.
    pub chooser: C,
}

impl<C: CellChooser> Sim<C> {
    /// Run until convergence or the iteration cap, calling `observer` hooks
    /// along the way.  Use [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimOutcome {
        let cap = self.config.iteration_cap(&self.grid);
        info!(
            rows = self.grid.row_count(),
            cols = self.grid.column_count(),
            threshold = self.config.threshold,
            cap,
            "simulation starting",
        );
        drive(&mut self.grid, self.config.threshold, cap, &mut self.chooser, observer)
    }

    /// Index of dissimilarity of the current grid.
    pub fn dissimilarity(&self) -> f64 {
        index_of_dissimilarity(&self.grid)
    }

    /// Unsatisfied positions of the current grid, row-major.
    pub fn unsatisfied(&self) -> Vec<Position> {
        unsatisfied_positions(&self.grid, self.config.threshold)
    }

    /// Consume the runner and return the final grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
