//! Command-line interface for generating and rendering word-search puzzles

use crate::io::configuration::{
    DEFAULT_GRID_DIMENSION, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORDS, PNG_EXTENSION,
};
use crate::io::error::Result;
use crate::io::image::{PageLayout, export_puzzle_as_png};
use crate::io::progress::ProgressManager;
use crate::io::text::{export_puzzle_as_text, write_text};
use crate::io::wordlist::load_word_list;
use crate::puzzle::builder::{BuilderConfig, DirectionPolicy, GridBuilder};
use crate::puzzle::random::RandomSelector;
use crate::puzzle::word::Word;
use crate::puzzle::word_search::WordSearch;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(
    author,
    version,
    about = "Generate word-search puzzles as text or PNG pages"
)]
/// Command-line arguments for the puzzle generator
// Independent on/off switches map naturally onto separate flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Word-list file, one word per line
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: Option<PathBuf>,

    /// Extra word to hide (repeatable)
    #[arg(short = 'W', long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Random seed for reproducible puzzles (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid width in cells (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random start cells tried per word before scanning the whole grid
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Draw a new direction on every retry instead of once per word
    #[arg(short, long)]
    pub resample_direction: bool,

    /// Output file; `.png` renders a page, anything else writes text
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every placement
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid (width, height), defaulting to the page-derived dimension
    pub fn dimensions(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_GRID_DIMENSION, DEFAULT_GRID_DIMENSION),
        }
    }

    /// The `--seed` value, or a fresh random seed reported at info level
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = rand::random();
            info!("no --seed given, using {seed}; pass --seed {seed} to reproduce this puzzle");
            seed
        })
    }

    /// Builder settings selected by the flags
    pub const fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            max_attempts: self.attempts,
            direction_policy: if self.resample_direction {
                DirectionPolicy::PerAttempt
            } else {
                DirectionPolicy::Fixed
            },
        }
    }
}

/// Destination chosen from the `--output` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Text sheet on standard output
    Stdout,
    /// Text sheet written to a file
    Text(PathBuf),
    /// Rendered PNG page
    Png(PathBuf),
}

impl OutputTarget {
    /// Pick the renderer from the output path's extension
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdout,
            Some(p)
                if p
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION)) =>
            {
                Self::Png(p.to_path_buf())
            }
            Some(p) => Self::Text(p.to_path_buf()),
        }
    }
}

/// Orchestrates word collection, generation and rendering for one run
pub struct PuzzleGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the puzzle and write it to the selected output
    ///
    /// # Errors
    ///
    /// Returns an error if word collection, placement or output fails
    pub fn process(&mut self) -> Result<()> {
        let puzzle = self.generate()?;
        let layout = PageLayout::default();

        match OutputTarget::from_path(self.cli.output.as_deref()) {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_text(&puzzle, layout.words_per_row, &mut handle)?;
            }
            OutputTarget::Text(path) => {
                export_puzzle_as_text(&puzzle, layout.words_per_row, &path)?;
                info!("wrote puzzle text to {}", path.display());
            }
            OutputTarget::Png(path) => {
                export_puzzle_as_png(&puzzle, &layout, &path)?;
                info!("wrote puzzle page to {}", path.display());
            }
        }

        Ok(())
    }

    /// Collect the words and build the finished puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read, a word is malformed,
    /// the grid is empty, or a word cannot be placed
    pub fn generate(&mut self) -> Result<WordSearch> {
        let start_time = Instant::now();
        let words = self.collect_words()?;
        let (width, height) = self.cli.dimensions();
        let seed = self.cli.resolve_seed();
        info!(
            "generating {width}x{height} puzzle with {} words (seed {seed})",
            words.len()
        );

        let mut builder = GridBuilder::new(
            width,
            height,
            self.cli.builder_config(),
            RandomSelector::new(seed),
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(words.len());
        }

        for (index, word) in words.iter().enumerate() {
            if let Some(ref pm) = self.progress_manager {
                pm.start_word(index, word.as_str());
            }

            builder.place_word(word.as_str())?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_word();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let puzzle = builder.finish()?;
        info!("puzzle generated in {:.2?}", start_time.elapsed());
        Ok(puzzle)
    }

    /// Words from the file and `--word` flags, or the default list
    ///
    /// # Errors
    ///
    /// Returns an error if the word-list file cannot be read or any word is
    /// malformed
    pub fn collect_words(&self) -> Result<Vec<Word>> {
        let mut words = match &self.cli.words_file {
            Some(path) => load_word_list(path)?,
            None => Vec::new(),
        };

        for raw in &self.cli.words {
            words.push(Word::new(raw)?);
        }

        if words.is_empty() && self.cli.words_file.is_none() {
            return DEFAULT_WORDS.iter().map(|raw| Word::new(raw)).collect();
        }

        Ok(words)
    }
}
