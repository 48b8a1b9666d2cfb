//! CLI entry point for the word-search generator

use clap::Parser;
use wordsearch::io::cli::{Cli, PuzzleGenerator};
use wordsearch::io::logging::init_logger;

fn main() -> wordsearch::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);
    let mut generator = PuzzleGenerator::new(cli);
    generator.process()
}
