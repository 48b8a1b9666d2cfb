/// Sequential placement and fill pass
pub mod builder;
/// Placement attempts and their covered cells
pub mod placement;
/// Randomness seam for placement and fill
pub mod random;
/// Normalized uppercase words
pub mod word;
/// Finished, immutable puzzles
pub mod word_search;
