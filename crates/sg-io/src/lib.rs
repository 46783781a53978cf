//! `sg-io` — reading grids from text and writing them back out.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`loader`]   | `load_grid_path`, `load_grid_reader`, `LoadOptions`        |
//! | [`render`]   | `write_grid`, `write_subregion`                            |
//! | [`error`]    | `LoadError`, `LoadResult<T>`                               |
//!
//! # Text format
//!
//! ```text
//! XO X
//! O  O
//! XXO
//! ```
//!
//! One row per line, one cell per character: `X` type A, `O` type B, space
//! empty.  Other characters are kept as opaque cells.

pub mod error;
pub mod loader;
pub mod render;


pub use error::{LoadError, LoadResult};
pub use loader::{LineTrim, LoadOptions, load_grid_path, load_grid_reader};
pub use render::{write_grid, write_subregion};
