//! Plain data row types written by output backends.

/// Summary statistics for one driver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSummaryRow {
    pub iteration:     u64,
    pub unsatisfied:   u64,
    pub moved:         u64,
    /// Relocation attempts that found no empty cell.
    pub stalled:       u64,
    /// Index of dissimilarity of the grid at the end of the iteration.
    pub dissimilarity: f64,
}

/// One successful relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow {
    pub iteration: u64,
    pub from_row:  u64,
    pub from_col:  u64,
    pub to_row:    u64,
    pub to_col:    u64,
}
