//! Word placement progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Words: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many words have been placed
pub struct ProgressManager {
    bar: ProgressBar,
    word_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, word_count: 0 }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            word_count: 0,
        }
    }

    /// Set the number of words to place
    pub fn initialize(&mut self, word_count: usize) {
        self.word_count = word_count;
        self.bar.set_length(word_count as u64);
        self.bar.set_position(0);
    }

    /// Show the word currently being placed
    pub fn start_word(&self, index: usize, word: &str) {
        let width = self.word_count.to_string().len();
        self.bar
            .set_message(format!("{:>width$}: {word}", index + 1));
    }

    /// Count a word as placed
    pub fn complete_word(&self) {
        self.bar.inc(1);
    }

    /// Words marked complete so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
