//! Spatial data structures for the puzzle grid
//!
//! This module contains:
//! - The four placement directions and their bounds
//! - The letter grid with fit testing, commit and fill

/// Placement directions and step geometry
pub mod direction;
/// Letter grid state and mutation
pub mod grid;

pub use direction::Direction;
pub use grid::LetterGrid;
