//! Logger setup for the command-line tool

use log::LevelFilter;

/// Log level for a run
///
/// `verbose` enables debug records for every placement; quiet runs only
/// report errors. Anything else shows the seed, output paths and timings.
pub const fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize `env_logger` at the level chosen by the flags
///
/// An explicit `RUST_LOG` overrides the flags. Calling this twice is harmless;
/// the second call leaves the first logger in place.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
