/// Command-line parsing and run orchestration
pub mod cli;
/// Page layout constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG page rendering
pub mod image;
/// Logger initialization
pub mod logging;
/// Progress display while placing words
pub mod progress;
/// Plain-text sheet rendering
pub mod text;
/// Word-list file loading
pub mod wordlist;
