//! Plain-text grid rendering.
//!
//! Each row is written as its symbols separated by single spaces, and the
//! grid is followed by one blank line.

use std::io::{self, Write};

use sg_core::{Bounds, Grid};

/// Write `grid` to `out`.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    write!(out, "{grid}")?;
    writeln!(out)
}

/// Write the `bounds` subregion of `grid` to `out`.
///
/// Bounds are clipped the same way as [`Grid::subregion`]; an out-of-range
/// request prints fewer rows (or none) rather than failing.
pub fn write_subregion<W: Write>(out: &mut W, grid: &Grid, bounds: Bounds) -> io::Result<()> {
    write_grid(out, &grid.subregion(bounds))
}
