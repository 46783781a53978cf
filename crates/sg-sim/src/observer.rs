//! Simulation observer trait for progress reporting and data collection.

use sg_core::{Grid, Position};

use crate::{IterationStats, SimOutcome};

/// Callbacks invoked by the driver at key points of each iteration.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, stats: &IterationStats, _grid: &Grid) {
///         println!("iteration {}: {} unsatisfied", stats.iteration, stats.unsatisfied);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each iteration, before the satisfaction scan.
    fn on_iteration_start(&mut self, _iteration: u64) {}

    /// Called with the unsatisfied snapshot, in row-major order.  An empty
    /// slice means the run has converged.
    fn on_unsatisfied(&mut self, _iteration: u64, _unsatisfied: &[Position]) {}

    /// Called after each relocation attempt.  `to` is `None` when no empty
    /// cell was available and the agent stayed put.
    fn on_move(&mut self, _iteration: u64, _from: Position, _to: Option<Position>) {}

    /// Called at the end of each iteration, including the one that detects
    /// convergence.
    fn on_iteration_end(&mut self, _stats: &IterationStats, _grid: &Grid) {}

    /// Called once after the run terminates.
    fn on_sim_end(&mut self, _outcome: &SimOutcome, _grid: &Grid) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_iteration_start(&mut self, iteration: u64) {
        (**self).on_iteration_start(iteration);
    }

    fn on_unsatisfied(&mut self, iteration: u64, unsatisfied: &[Position]) {
        (**self).on_unsatisfied(iteration, unsatisfied);
    }

    fn on_move(&mut self, iteration: u64, from: Position, to: Option<Position>) {
        (**self).on_move(iteration, from, to);
    }

    fn on_iteration_end(&mut self, stats: &IterationStats, grid: &Grid) {
        (**self).on_iteration_end(stats, grid);
    }

    fn on_sim_end(&mut self, outcome: &SimOutcome, grid: &Grid) {
        (**self).on_sim_end(outcome, grid);
    }
}
