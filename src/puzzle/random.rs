//! Injectable randomness for placement and fill decisions

use crate::spatial::direction::Direction;
use crate::spatial::grid::ALPHABET;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of every random draw the builder makes
///
/// Implementations must return values inside the requested ranges. The builder
/// never calls `row` or `col` with a zero bound.
pub trait RandomSource {
    /// Uniform choice among the four directions
    fn direction(&mut self) -> Direction;

    /// Uniform row index in `0..rows`
    fn row(&mut self, rows: usize) -> usize;

    /// Uniform column index in `0..cols`
    fn col(&mut self, cols: usize) -> usize;

    /// Uniform letter from `A..=Z` as an ASCII byte
    fn letter(&mut self) -> u8;

    /// Uniform index in `0..len`, used to pick among exhaustively found
    /// placements
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Seeded random selector for reproducible puzzles
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

impl RandomSource for RandomSelector {
    fn direction(&mut self) -> Direction {
        Direction::from_index(self.below(Direction::ALL.len()))
    }

    fn row(&mut self, rows: usize) -> usize {
        self.below(rows)
    }

    fn col(&mut self, cols: usize) -> usize {
        self.below(cols)
    }

    fn letter(&mut self) -> u8 {
        let index = self.below(ALPHABET.len());
        ALPHABET.get(index).copied().unwrap_or(b'A')
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.below(len)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn direction(&mut self) -> Direction {
        (**self).direction()
    }

    fn row(&mut self, rows: usize) -> usize {
        (**self).row(rows)
    }

    fn col(&mut self, cols: usize) -> usize {
        (**self).col(cols)
    }

    fn letter(&mut self) -> u8 {
        (**self).letter()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}
