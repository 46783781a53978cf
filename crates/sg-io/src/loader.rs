//! Text grid loader.
//!
//! Line terminators (`\n` and `\r\n`) are always removed.  What happens to
//! the rest of the line depends on [`LineTrim`]:
//!
//! | Mode         | Effect                                                  |
//! |--------------|---------------------------------------------------------|
//! | `Terminator` | keep every character, so edge spaces stay empty cells   |
//! | `Whitespace` | strip leading/trailing whitespace; rows whose edge cells are empty come out short |
//!
//! Loading is permissive: ragged rows and unknown symbols are accepted
//! unless [`LoadOptions::strict`] is set.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sg_core::Grid;
use tracing::debug;

use crate::LoadResult;

/// How much of each line is discarded before it becomes a row.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum LineTrim {
    /// Remove only the line terminator.
    #[default]
    Terminator,
    /// Remove all leading and trailing whitespace.
    Whitespace,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct LoadOptions {
    pub trim:   LineTrim,
    /// Run [`Grid::validate`] on the loaded grid.
    pub strict: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a grid from a text file.
pub fn load_grid_path(path: &Path, options: &LoadOptions) -> LoadResult<Grid> {
    let file = std::fs::File::open(path)?;
    load_grid_reader(file, options)
}

/// Like [`load_grid_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
pub fn load_grid_reader<R: Read>(reader: R, options: &LoadOptions) -> LoadResult<Grid> {
    let lines = BufReader::new(reader)
        .lines()
        .map(|line| line.map(|l| trim_line(&l, options.trim).to_owned()))
        .collect::<Result<Vec<String>, _>>()?;

    let grid = Grid::from_lines(lines);
    if options.strict {
        grid.validate()?;
    }

    let (rows, cols) = grid.dimensions();
    debug!(rows, cols, "grid loaded");
    Ok(grid)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn trim_line(line: &str, trim: LineTrim) -> &str {
    match trim {
        // `lines()` strips `\n` and `\r\n`; only a stray `\r` (at EOF or
        // from `\r\r\n`) survives to here.
        LineTrim::Terminator => line.strip_suffix('\r').unwrap_or(line),
        LineTrim::Whitespace => line.trim(),
    }
}
