//! Relocation of a single agent to a random empty cell.

use sg_core::{Cell, CellChooser, Grid, Position};

/// Move the occupant of `from` to an empty cell picked by `chooser`.
///
/// Candidates are all currently empty cells in row-major order; the chooser
/// is consulted exactly once when there is at least one.  Returns the
/// destination, or `None` (grid untouched, chooser not consulted) when
/// `from` is outside the grid or no empty cell exists.
pub fn relocate<C>(grid: &mut Grid, from: Position, chooser: &mut C) -> Option<Position>
where
    C: CellChooser + ?Sized,
{
    let occupant = grid.get(from)?;
    let empty = grid.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let to = empty[chooser.choose_index(empty.len())];
    grid.set(to, occupant);
    grid.set(from, Cell::Empty);
    Some(to)
}

/// Move the agent at `(row, col)` to a random empty cell.
///
/// Returns `false` and leaves the grid unchanged when there is nowhere to
/// go.
pub fn move_to_empty<C>(grid: &mut Grid, row: usize, col: usize, chooser: &mut C) -> bool
where
    C: CellChooser + ?Sized,
{
    relocate(grid, Position::new(row, col), chooser).is_some()
}
