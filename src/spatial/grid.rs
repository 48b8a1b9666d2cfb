//! Letter grid storage with fit testing, commit and the fill pass
//!
//! Cells hold `Option<u8>`: `None` marks a cell no word has touched yet and
//! `Some(letter)` an uppercase ASCII letter. Letters only enter the grid
//! through `try_commit` and `fill_empty`, and `try_commit` refuses any write
//! that would replace a letter with a different one.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::EMPTY_CELL_MARKER;
use crate::io::error::{PuzzleError, Result, invalid_input};
use crate::puzzle::placement::Placement;
use crate::puzzle::random::RandomSource;
use crate::puzzle::word::Word;

/// The 26 letters cells may hold
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mutable puzzle grid used during generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<u8>>,
}

impl LetterGrid {
    /// Create an all-empty grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(invalid_input("height", &rows, &"grid needs at least one row"));
        }
        if cols == 0 {
            return Err(invalid_input("width", &cols, &"grid needs at least one column"));
        }

        Ok(Self {
            cells: Array2::from_elem((rows, cols), None),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Letter at a cell, `None` when empty or out of bounds
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells
            .get([row, col])
            .copied()
            .flatten()
            .map(char::from)
    }

    /// Whether an in-bounds cell is still empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).is_some_and(Option::is_none)
    }

    /// Count of cells no word or fill has written
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// True once every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Fit test for `word` at `placement`
    ///
    /// The span must satisfy the direction's bounds and every covered cell must
    /// be empty or already hold the same letter.
    pub fn fits(&self, word: &Word, placement: Placement) -> bool {
        if !placement.within_bounds(word.len(), self.rows(), self.cols()) {
            return false;
        }

        placement
            .cells(word.len())
            .zip(word.letters())
            .all(|(index, &letter)| match self.cells.get(index) {
                Some(None) => true,
                Some(Some(existing)) => *existing == letter,
                None => false,
            })
    }

    /// Write `word` at `placement` if it fits, returning whether it was written
    pub fn try_commit(&mut self, word: &Word, placement: Placement) -> bool {
        if !self.fits(word, placement) {
            return false;
        }

        for (index, &letter) in placement.cells(word.len()).zip(word.letters()) {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = Some(letter);
            }
        }
        true
    }

    /// Assign a random letter to every empty cell, returning how many were filled
    ///
    /// A complete grid is left untouched and draws nothing from `source`.
    pub fn fill_empty<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut filled = 0;
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(source.letter());
                filled += 1;
            }
        }
        filled
    }

    /// Row contents with empty cells shown as the empty marker
    pub fn row_string(&self, row: usize) -> Option<String> {
        (row < self.rows()).then(|| {
            self.cells
                .row(row)
                .iter()
                .map(|cell| cell.map_or(EMPTY_CELL_MARKER, char::from))
                .collect()
        })
    }

    /// Convert a complete grid into plain letters
    ///
    /// # Errors
    ///
    /// Returns `IncompleteGrid` if any cell is still empty
    pub fn into_letters(self) -> Result<Array2<char>> {
        let empty_cells = self.empty_count();
        if empty_cells > 0 {
            return Err(PuzzleError::IncompleteGrid { empty_cells });
        }

        Ok(self
            .cells
            .mapv(|cell| cell.map_or(EMPTY_CELL_MARKER, char::from)))
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            if let Some(line) = self.row_string(row) {
                f.write_str(&line)?;
            }
        }
        Ok(())
    }
}
