//! Finished puzzles handed to renderers

use ndarray::Array2;
use std::fmt;

use crate::puzzle::word::Word;

/// A fully populated grid together with the words hidden in it
///
/// Only the words are kept, never their positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearch {
    letters: Array2<char>,
    words: Vec<Word>,
}

impl WordSearch {
    /// Wrap a complete letter grid and its word legend
    pub const fn new(letters: Array2<char>, words: Vec<Word>) -> Self {
        Self { letters, words }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.letters.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.letters.ncols()
    }

    /// Letter at a cell
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.letters.get([row, col]).copied()
    }

    /// Read-only view of the whole grid
    pub const fn letters(&self) -> &Array2<char> {
        &self.letters
    }

    /// Words in placement order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// One string per grid row
    pub fn row_strings(&self) -> Vec<String> {
        self.letters
            .rows()
            .into_iter()
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.row_strings().join("\n"))
    }
}
