//! `sg-sim` — the Schelling segregation engine.
//!
//! # Iteration loop
//!
//! ```text
//! for iteration in 0..cap:            (cap = row_count * column_count)
//!   ① Scan     — classify every cell in row-major order; collect the
//!                unsatisfied positions into a snapshot.
//!   ② Converge — empty snapshot → stop.
//!   ③ Relocate — for each snapshot position, in order, move that agent to a
//!                uniformly chosen empty cell of the *live* grid.
//! ```
//!
//! Relocations within one pass see the effects of earlier relocations in the
//! same pass (the empty-cell set shifts as agents move).  The snapshot
//! itself is never re-evaluated mid-pass.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`satisfaction`]  | `is_satisfied`, `neighbor_counts`, `unsatisfied_positions` |
//! | [`relocation`]    | `move_to_empty`, `relocate`                           |
//! | [`metric`]        | `index_of_dissimilarity`                              |
//! | [`sim`]           | `simulate`, `Sim`, `SimOutcome`, `IterationStats`     |
//! | [`builder`]       | `SimBuilder` (optional strict validation)             |
//! | [`observer`]      | `SimObserver`, `NoopObserver`                         |
//! | [`error`]         | `SimError`, `SimResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::{Grid, SimConfig};
//! use sg_sim::{NoopObserver, SimBuilder, index_of_dissimilarity};
//!
//! let grid = Grid::from_lines(["XO X", "O XO", "XX O"]);
//! let before = index_of_dissimilarity(&grid);
//! let mut sim = SimBuilder::new(SimConfig::new(0.5, 42), grid).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! let after = sim.dissimilarity();
//! ```

pub mod builder;
pub mod error;
pub mod metric;
pub mod observer;
pub mod relocation;
pub mod satisfaction;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metric::index_of_dissimilarity;
pub use observer::{NoopObserver, SimObserver};
pub use relocation::{move_to_empty, relocate};
pub use satisfaction::{
    NeighborCounts, is_satisfied, is_satisfied_at, neighbor_counts, unsatisfied_positions,
};
pub use sim::{IterationStats, Sim, SimOutcome, Termination, simulate};
