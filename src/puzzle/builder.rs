//! Sequential word placement and the final fill pass
//!
//! Words are placed strictly in input order so later words see, and may share
//! letters with, earlier ones. Each word draws a direction, then random start
//! cells until one fits. After `max_attempts` misses the builder scans every
//! start cell instead, and only reports `PlacementExhausted` when that scan
//! finds nothing.

use log::{debug, warn};

use crate::io::configuration::DEFAULT_MAX_ATTEMPTS;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::placement::Placement;
use crate::puzzle::random::RandomSource;
use crate::puzzle::word::Word;
use crate::puzzle::word_search::WordSearch;
use crate::spatial::direction::Direction;
use crate::spatial::grid::LetterGrid;

/// How directions are drawn while searching for a placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// One direction per word, kept for every retry and for the exhaustive scan
    #[default]
    Fixed,
    /// A fresh direction on every retry; the exhaustive scan covers all four
    PerAttempt,
}

/// Builder parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Random start cells tried per word before falling back to a full scan
    pub max_attempts: usize,
    /// Direction sampling behaviour
    pub direction_policy: DirectionPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            direction_policy: DirectionPolicy::Fixed,
        }
    }
}

/// Places words one at a time into a grid, then fills the gaps
pub struct GridBuilder<S: RandomSource> {
    grid: LetterGrid,
    config: BuilderConfig,
    source: S,
    words: Vec<Word>,
}

impl<S: RandomSource> GridBuilder<S> {
    /// Create a builder over an empty `height` x `width` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn new(width: usize, height: usize, config: BuilderConfig, source: S) -> Result<Self> {
        Ok(Self {
            grid: LetterGrid::new(height, width)?,
            config,
            source,
            words: Vec::new(),
        })
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Number of words committed so far
    pub fn placed_count(&self) -> usize {
        self.words.len()
    }

    /// Normalize `raw`, find a placement for it and commit it
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidInput` if the word is empty or not made of letters
    /// - `PlacementExhausted` if no start cell in the allowed directions fits
    pub fn place_word(&mut self, raw: &str) -> Result<Placement> {
        let word = Word::new(raw)?;
        let (rows, cols) = self.grid.dimensions();
        let initial = self.source.direction();

        for attempt in 1..=self.config.max_attempts {
            let direction = match self.config.direction_policy {
                DirectionPolicy::PerAttempt if attempt > 1 => self.source.direction(),
                _ => initial,
            };
            let row = self.source.row(rows);
            let col = self.source.col(cols);
            let placement = Placement::new(row, col, direction);

            if self.grid.try_commit(&word, placement) {
                debug!("placed {word} {direction} at ({row}, {col}) after {attempt} attempt(s)");
                self.words.push(word);
                return Ok(placement);
            }
        }

        warn!(
            "{word}: no fit after {} random attempts, scanning every start cell",
            self.config.max_attempts
        );
        self.place_exhaustively(word, initial)
    }

    fn place_exhaustively(&mut self, word: Word, initial: Direction) -> Result<Placement> {
        let (rows, cols) = self.grid.dimensions();
        let directions: &[Direction] = match self.config.direction_policy {
            DirectionPolicy::Fixed => std::slice::from_ref(&initial),
            DirectionPolicy::PerAttempt => &Direction::ALL,
        };

        let candidates: Vec<Placement> = directions
            .iter()
            .flat_map(|&direction| Placement::enumerate(direction, word.len(), rows, cols))
            .filter(|&placement| self.grid.fits(&word, placement))
            .collect();

        let chosen = if candidates.is_empty() {
            None
        } else {
            let index = self.source.choose_index(candidates.len());
            candidates.get(index).copied()
        };

        if let Some(placement) = chosen
            && self.grid.try_commit(&word, placement)
        {
            debug!(
                "placed {word} {} at ({}, {}) by scan of {} candidates",
                placement.direction,
                placement.row,
                placement.col,
                candidates.len()
            );
            self.words.push(word);
            return Ok(placement);
        }

        Err(PuzzleError::PlacementExhausted {
            word: word.to_string(),
            direction: match self.config.direction_policy {
                DirectionPolicy::Fixed => Some(initial),
                DirectionPolicy::PerAttempt => None,
            },
            attempts: self.config.max_attempts,
            grid_dimensions: (rows, cols),
        })
    }

    /// Run the fill pass and return the finished puzzle
    ///
    /// # Errors
    ///
    /// Returns `IncompleteGrid` if the fill pass leaves an empty cell, which a
    /// conforming `RandomSource` never causes
    pub fn finish(mut self) -> Result<WordSearch> {
        let filled = self.grid.fill_empty(&mut self.source);
        debug!(
            "filled {filled} of {} cells with random letters",
            self.grid.rows() * self.grid.cols()
        );
        let letters = self.grid.into_letters()?;
        Ok(WordSearch::new(letters, self.words))
    }
}

/// Build a complete puzzle from `words` in one call
///
/// # Errors
///
/// Returns:
/// - `InvalidInput` for a zero dimension or a malformed word
/// - `PlacementExhausted` when a word cannot be placed
pub fn build_grid<W, S>(
    words: &[W],
    width: usize,
    height: usize,
    config: BuilderConfig,
    source: &mut S,
) -> Result<WordSearch>
where
    W: AsRef<str>,
    S: RandomSource + ?Sized,
{
    let mut builder = GridBuilder::new(width, height, config, source)?;
    for word in words {
        builder.place_word(word.as_ref())?;
    }
    builder.finish()
}
