//! Unit tests mirroring the `src/` module layout

use std::collections::VecDeque;
use wordsearch::puzzle::random::RandomSource;
use wordsearch::spatial::direction::Direction;

mod io;
mod puzzle;

/// Random source replaying fixed draws, falling back to defaults when a
/// queue runs dry
pub struct ScriptedSource {
    directions: VecDeque<Direction>,
    positions: VecDeque<(usize, usize)>,
    letters: VecDeque<u8>,
    pending_col: usize,
    /// Letter used once `letters` is exhausted
    pub fill: u8,
    /// Number of row draws made
    pub row_draws: usize,
    /// Number of letter draws made
    pub letter_draws: usize,
}

impl ScriptedSource {
    /// Script directions and start cells; fill letters default to `fill`
    pub fn new(directions: &[Direction], positions: &[(usize, usize)], fill: u8) -> Self {
        Self {
            directions: directions.iter().copied().collect(),
            positions: positions.iter().copied().collect(),
            letters: VecDeque::new(),
            pending_col: 0,
            fill,
            row_draws: 0,
            letter_draws: 0,
        }
    }

    /// Script the fill letters drawn in row-major order
    pub fn with_letters(mut self, letters: &[u8]) -> Self {
        self.letters = letters.iter().copied().collect();
        self
    }
}

impl RandomSource for ScriptedSource {
    fn direction(&mut self) -> Direction {
        self.directions.pop_front().unwrap_or(Direction::Horizontal)
    }

    fn row(&mut self, rows: usize) -> usize {
        self.row_draws += 1;
        let (row, col) = self.positions.pop_front().unwrap_or((0, 0));
        self.pending_col = col;
        row.min(rows - 1)
    }

    fn col(&mut self, cols: usize) -> usize {
        self.pending_col.min(cols - 1)
    }

    fn letter(&mut self) -> u8 {
        self.letter_draws += 1;
        self.letters.pop_front().unwrap_or(self.fill)
    }

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}
