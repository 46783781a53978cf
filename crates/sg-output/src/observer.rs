//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sg_core::{Grid, Position};
use sg_sim::{IterationStats, SimObserver, SimOutcome, index_of_dissimilarity};

use crate::row::{IterationSummaryRow, MoveRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes per-iteration summaries and relocations to
/// any [`OutputWriter`] backend.
///
/// Moves are buffered for the current iteration and written in one batch at
/// the iteration's end.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<MoveRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_move(&mut self, iteration: u64, from: Position, to: Option<Position>) {
        if let Some(to) = to {
            self.pending.push(MoveRow {
                iteration,
                from_row: from.row as u64,
                from_col: from.col as u64,
                to_row:   to.row as u64,
                to_col:   to.col as u64,
            });
        }
    }

    fn on_iteration_end(&mut self, stats: &IterationStats, grid: &Grid) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_moves(&rows);
            self.store_err(result);
        }

        let row = IterationSummaryRow {
            iteration:     stats.iteration,
            unsatisfied:   stats.unsatisfied as u64,
            moved:         stats.moved as u64,
            stalled:       stats.stalled as u64,
            dissimilarity: index_of_dissimilarity(grid),
        };
        let result = self.writer.write_iteration_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _outcome: &SimOutcome, _grid: &Grid) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
