//! `sg-core` — foundational types for the Schelling segregation simulator.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell` (type A, type B, empty, opaque other)          |
//! | [`grid`]        | `Grid`, `Position`, `Bounds`, `dimensions`            |
//! | [`config`]      | `SimConfig`                                           |
//! | [`rng`]         | `CellChooser`, `SimRng`, `ScriptedChooser`            |
//! | [`error`]       | `GridError`, `GridResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SimConfig;
pub use error::{GridError, GridResult};
pub use grid::{Bounds, Grid, Position, dimensions};
pub use rng::{CellChooser, ScriptedChooser, SimRng};
