//! Placement attempts: a start cell plus a direction

use crate::spatial::direction::Direction;

/// Candidate start position and orientation for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Writing direction
    pub direction: Direction,
}

impl Placement {
    /// Create a placement attempt
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Check the direction-specific bounds for a word of `length`
    pub const fn within_bounds(&self, length: usize, rows: usize, cols: usize) -> bool {
        self.direction
            .span_fits(self.row, self.col, length, rows, cols)
    }

    /// Grid indices covered by a word of `length`, first letter first
    ///
    /// Indices that would fall above row zero are skipped, so callers must
    /// check `within_bounds` first.
    pub fn cells(self, length: usize) -> impl Iterator<Item = [usize; 2]> {
        (0..length).filter_map(move |offset| self.direction.cell_at(self.row, self.col, offset))
    }

    /// Every start position for `direction` whose span fits a word of `length`
    pub fn enumerate(
        direction: Direction,
        length: usize,
        rows: usize,
        cols: usize,
    ) -> impl Iterator<Item = Self> {
        (0..rows).flat_map(move |row| {
            (0..cols).filter_map(move |col| {
                let placement = Self::new(row, col, direction);
                placement
                    .within_bounds(length, rows, cols)
                    .then_some(placement)
            })
        })
    }
}
