//! Placement directions and their grid geometry
//!
//! Rows grow downward and columns grow rightward. Every direction reads
//! left-to-right or top-to-bottom; reversed words are not generated.

use std::fmt;

/// Orientation a word is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Bottom-left to top-right (decreasing row, increasing column)
    DiagonalUp,
    /// Top-left to bottom-right (increasing row, increasing column)
    DiagonalDown,
}

impl Direction {
    /// All directions in sampling order
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalUp,
        Self::DiagonalDown,
    ];

    /// Map a uniform index in `0..4` to a direction, wrapping larger values
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Horizontal,
            1 => Self::Vertical,
            2 => Self::DiagonalUp,
            _ => Self::DiagonalDown,
        }
    }

    /// Row and column step between consecutive letters
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalUp => (-1, 1),
            Self::DiagonalDown => (1, 1),
        }
    }

    /// Check whether a word of `length` starting at (`row`, `col`) stays inside
    /// a `rows` x `cols` grid
    ///
    /// Starts outside the grid never fit. A zero-length span fits anywhere
    /// inside the grid.
    pub const fn span_fits(
        self,
        row: usize,
        col: usize,
        length: usize,
        rows: usize,
        cols: usize,
    ) -> bool {
        if row >= rows || col >= cols {
            return false;
        }

        match self {
            Self::Horizontal => col + length <= cols,
            Self::Vertical => row + length <= rows,
            Self::DiagonalUp => row + 1 >= length && col + length <= cols,
            Self::DiagonalDown => row + length <= rows && col + length <= cols,
        }
    }

    /// Grid index of the `offset`-th letter of a word starting at (`row`, `col`)
    ///
    /// Returns `None` when the offset would leave the non-negative quadrant.
    pub const fn cell_at(self, row: usize, col: usize, offset: usize) -> Option<[usize; 2]> {
        match self {
            Self::Horizontal => Some([row, col + offset]),
            Self::Vertical => Some([row + offset, col]),
            Self::DiagonalUp => match row.checked_sub(offset) {
                Some(r) => Some([r, col + offset]),
                None => None,
            },
            Self::DiagonalDown => Some([row + offset, col + offset]),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalUp => "diagonal-up",
            Self::DiagonalDown => "diagonal-down",
        };
        f.write_str(name)
    }
}
