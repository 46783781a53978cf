//! The satisfaction rule.
//!
//! An agent looks at the clipped 3×3 block around it.  Empty neighbors are
//! ignored; a neighbor equal to the agent's own cell is "same"; every other
//! neighbor is "different".  That includes unrecognised symbols, which are
//! never excluded from the count.
//!
//! ```text
//! satisfied = cell is empty
//!          || same + different == 0
//!          || same / (same + different) >= threshold
//! ```

use sg_core::{Cell, Grid, Position};

/// Same/different neighbor tallies for one cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct NeighborCounts {
    pub same:      usize,
    pub different: usize,
}

impl NeighborCounts {
    /// Non-empty neighbors.
    #[inline]
    pub fn occupied(self) -> usize {
        self.same + self.different
    }

    /// `same / occupied`, or `None` when every neighbor is empty or
    /// off-grid.
    #[inline]
    pub fn same_fraction(self) -> Option<f64> {
        match self.occupied() {
            0 => None,
            n => Some(self.same as f64 / n as f64),
        }
    }
}

/// Tally the neighbors of `pos` against the cell stored there.
///
/// A position outside the grid is compared as if it held an empty cell.
pub fn neighbor_counts(grid: &Grid, pos: Position) -> NeighborCounts {
    let agent = grid.get(pos).unwrap_or(Cell::Empty);
    grid.neighbors(pos)
        .filter(|(_, cell)| !cell.is_empty())
        .fold(NeighborCounts::default(), |mut acc, (_, cell)| {
            if cell == agent {
                acc.same += 1;
            } else {
                acc.different += 1;
            }
            acc
        })
}

/// `true` if the occupant of `(row, col)` is content with its neighborhood.
///
/// Empty cells and positions outside the grid are always satisfied, as is an
/// agent with no occupied neighbors.  Ties at exactly `threshold` count as
/// satisfied.
pub fn is_satisfied(grid: &Grid, row: usize, col: usize, threshold: f64) -> bool {
    is_satisfied_at(grid, Position::new(row, col), threshold)
}

/// [`is_satisfied`] taking a [`Position`].
pub fn is_satisfied_at(grid: &Grid, pos: Position, threshold: f64) -> bool {
    match grid.get(pos) {
        None | Some(Cell::Empty) => true,
        Some(_) => match neighbor_counts(grid, pos).same_fraction() {
            None           => true,
            Some(fraction) => fraction >= threshold,
        },
    }
}

/// Every unsatisfied position, in row-major order.
pub fn unsatisfied_positions(grid: &Grid, threshold: f64) -> Vec<Position> {
    grid.positions()
        .filter(|&pos| !is_satisfied_at(grid, pos, threshold))
        .collect()
}
