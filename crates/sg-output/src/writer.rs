//! The `OutputWriter` trait implemented by backend writers.

use crate::{IterationSummaryRow, MoveRow, OutputResult};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of relocations.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Write one iteration summary row.
    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
