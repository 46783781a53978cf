//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `iteration_summaries.csv`
//! - `moves.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{IterationSummaryRow, MoveRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    moves:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("iteration_summaries.csv"))?;
        summaries.write_record(["iteration", "unsatisfied", "moved", "stalled", "dissimilarity"])?;

        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record(["iteration", "from_row", "from_col", "to_row", "to_col"])?;

        Ok(Self {
            summaries,
            moves,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.iteration.to_string(),
                row.from_row.to_string(),
                row.from_col.to_string(),
                row.to_row.to_string(),
                row.to_col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.iteration.to_string(),
            row.unsatisfied.to_string(),
            row.moved.to_string(),
            row.stalled.to_string(),
            format!("{:.6}", row.dissimilarity),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.moves.flush()?;
        Ok(())
    }
}
