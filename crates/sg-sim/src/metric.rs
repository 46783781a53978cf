//! Index of dissimilarity (Duncan & Duncan), aggregated by row.
//!
//! ```text
//! D = ½ · Σ_i | a_i / A  −  b_i / B |
//! ```
//!
//! `a_i`, `b_i` are the type A / type B counts in row `i`; `A`, `B` the
//! grid-wide totals.  A proportion whose total is zero is taken as 0, so a
//! grid holding only one type still yields a finite score.  Empty and
//! unrecognised cells are not counted.
//!
//! Rows are the areal unit.  Transposing a grid generally changes the score.

use sg_core::{Cell, Grid};

#[inline]
fn proportion(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 }
}

/// Row-aggregated index of dissimilarity, in `[0, 1]`.
pub fn index_of_dissimilarity(grid: &Grid) -> f64 {
    let total_a = grid.count(Cell::TypeA);
    let total_b = grid.count(Cell::TypeB);

    let sum: f64 = (0..grid.row_count())
        .map(|row| {
            let a = proportion(grid.count_in_row(row, Cell::TypeA), total_a);
            let b = proportion(grid.count_in_row(row, Cell::TypeB), total_b);
            (a - b).abs()
        })
        .sum();

    0.5 * sum
}
