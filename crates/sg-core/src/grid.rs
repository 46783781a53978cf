//! The simulation grid and position types.
//!
//! # Permissive by default
//!
//! `Grid` is a thin wrapper over `Vec<Vec<Cell>>`.  Construction never fails
//! and no query enforces rectangularity: the column count is taken from the
//! first row, and cells beyond a short row's length simply do not exist
//! (lookups return `None`).  Call [`Grid::validate`] for the strict checks.
//!
//! # Iteration order
//!
//! Every scan over the grid ([`Grid::positions`], [`Grid::empty_positions`],
//! [`Grid::neighbors`]) is row-major.  The simulation driver relies on this
//! order for reproducible relocation passes.

use std::fmt;

use crate::{Cell, GridError, GridResult};

// ── Position ──────────────────────────────────────────────────────────────────

/// A 0-indexed `(row, col)` pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    #[inline(always)]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive rectangular bounds used for subregion extraction.
///
/// Bounds are not validated against any grid: an end beyond the grid is
/// clipped, a start beyond the grid (or past the end) yields nothing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row:   usize,
    pub end_col:   usize,
}

impl Bounds {
    pub const fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self { start_row, start_col, end_row, end_col }
    }
}

/// Clip the inclusive range `[start, end]` to `0..len`.
fn clip(len: usize, start: usize, end: usize) -> std::ops::Range<usize> {
    let stop = end.saturating_add(1).min(len);
    start.min(stop)..stop
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A 2D grid of [`Cell`]s stored row by row.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Wrap pre-built rows.  No validation is performed.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid from text lines, one cell per character.
    ///
    /// ```
    /// use sg_core::{Cell, Grid, Position};
    ///
    /// let grid = Grid::from_lines(["XO", " X"]);
    /// assert_eq!(grid.get(Position::new(1, 0)), Some(Cell::Empty));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().map(Cell::from_char).collect())
            .collect();
        Self { rows }
    }

    /// A `rows × cols` grid with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self { rows: vec![vec![cell; cols]; rows] }
    }

    // ── Dimension queries ─────────────────────────────────────────────────

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 for a grid with no rows.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(row_count, column_count)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// `row_count * column_count` — the nominal number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.row_count() * self.column_count()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// The cell at `pos`, or `None` if it lies outside the stored rows.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrite the cell at `pos`.  Returns `false` (and changes nothing) if
    /// `pos` is outside the stored rows.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.rows.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    // ── Scans ─────────────────────────────────────────────────────────────

    /// All positions in row-major order, bounded by `column_count` and
    /// skipping cells a short row does not have.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.column_count();
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            (0..cols.min(cells.len())).map(move |col| Position { row, col })
        })
    }

    /// The clipped 3×3 neighborhood of `pos`, excluding `pos` itself.
    ///
    /// Edge and corner cells yield fewer than 8 neighbors.  There is no
    /// wraparound.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let rows = clip(self.row_count(), pos.row.saturating_sub(1), pos.row.saturating_add(1));
        let cols = clip(self.column_count(), pos.col.saturating_sub(1), pos.col.saturating_add(1));
        rows.flat_map(move |row| cols.clone().map(move |col| Position { row, col }))
            .filter(move |&p| p != pos)
            .filter_map(move |p| self.get(p).map(|cell| (p, cell)))
    }

    /// Every currently empty position, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&p| self.get(p).is_some_and(Cell::is_empty))
            .collect()
    }

    /// Number of cells equal to `cell` across the whole grid.
    pub fn count(&self, cell: Cell) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c == cell).count())
            .sum()
    }

    /// Number of cells equal to `cell` in row `row` (0 for a missing row).
    pub fn count_in_row(&self, row: usize, cell: Cell) -> usize {
        self.rows
            .get(row)
            .map_or(0, |r| r.iter().filter(|&&c| c == cell).count())
    }

    // ── Derived grids ─────────────────────────────────────────────────────

    /// Rows `[start_row, end_row]` and, within them, columns
    /// `[start_col, end_col]`.
    ///
    /// Out-of-range bounds are clipped rather than rejected, so the result
    /// may be smaller than requested or empty.
    pub fn subregion(&self, bounds: Bounds) -> Grid {
        let rows = clip(self.rows.len(), bounds.start_row, bounds.end_row);
        let rows = self.rows[rows]
            .iter()
            .map(|row| row[clip(row.len(), bounds.start_col, bounds.end_col)].to_vec())
            .collect();
        Grid { rows }
    }

    /// A copy with every type A cell turned into type B and vice versa.
    pub fn swapped_types(&self) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.swapped()).collect())
            .collect();
        Grid { rows }
    }

    /// A copy with rows and columns exchanged.  Missing cells of a ragged
    /// grid become empty.
    pub fn transposed(&self) -> Grid {
        let (rows, cols) = self.dimensions();
        let rows = (0..cols)
            .map(|col| {
                (0..rows)
                    .map(|row| self.get(Position { row, col }).unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();
        Grid { rows }
    }

    // ── Strict validation ─────────────────────────────────────────────────

    /// Check the invariants the engine otherwise assumes: at least one row
    /// and one column, equal row lengths, and only `X`/`O`/space symbols.
    pub fn validate(&self) -> GridResult<()> {
        let (rows, cols) = self.dimensions();
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged { row, expected: cols, got: cells.len() });
            }
            if let Some((col, &Cell::Other(symbol))) = cells
                .iter()
                .enumerate()
                .find(|(_, c)| matches!(c, Cell::Other(_)))
            {
                return Err(GridError::UnknownSymbol { symbol, at: Position { row, col } });
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}

/// Rows on separate lines, symbols separated by single spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `(row_count, column_count)` of `grid`.  Free-function form of
/// [`Grid::dimensions`].
#[inline]
pub fn dimensions(grid: &Grid) -> (usize, usize) {
    grid.dimensions()
}
