//! Word-search puzzle generation
//!
//! Words are placed one after another into a fixed-size letter grid along
//! one of four directions, sharing cells only where letters coincide. The
//! remaining cells are filled with random letters and the finished grid is
//! rendered as a text sheet or a PNG page.

#![forbid(unsafe_code)]

/// Input/output operations, rendering and error handling
pub mod io;
/// Word normalization, placement search and the grid builder
pub mod puzzle;
/// Letter grid storage and direction geometry
pub mod spatial;

pub use io::error::{PuzzleError, Result};
pub use puzzle::builder::{BuilderConfig, DirectionPolicy, GridBuilder, build_grid};
pub use puzzle::word_search::WordSearch;
