//! Error types and context management for puzzle generation

use std::fmt;
use std::path::PathBuf;

use crate::spatial::direction::Direction;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Caller-supplied value rejected before generation
    InvalidInput {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No start cell accepts the word
    ///
    /// Occurs when the word is longer than the span available in the allowed
    /// direction(s), or when earlier words block every candidate cell.
    PlacementExhausted {
        /// The normalized word
        word: String,
        /// Direction searched, `None` when all directions were searched
        direction: Option<Direction>,
        /// Random attempts made before the exhaustive scan
        attempts: usize,
        /// Grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// Grid conversion requested while cells are still empty
    IncompleteGrid {
        /// Number of empty cells
        empty_cells: usize,
    },

    /// Word-list file entry could not be used
    WordList {
        /// Path to the word-list file
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save a rendered page to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid input '{parameter}' = '{value}': {reason}")
            }
            Self::PlacementExhausted {
                word,
                direction,
                attempts,
                grid_dimensions,
            } => {
                let searched = direction.map_or_else(
                    || "any direction".to_string(),
                    |d| format!("direction {d}"),
                );
                write!(
                    f,
                    "Cannot place '{word}' in {searched} after {attempts} attempts (grid size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::IncompleteGrid { empty_cells } => {
                write!(f, "Grid is incomplete: {empty_cells} empty cells remain")
            }
            Self::WordList { path, line, reason } => {
                write!(f, "Word list '{}' line {line}: {reason}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File involved in the failing operation
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with file information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Attach the file path and operation
    ///
    /// # Errors
    ///
    /// Propagates the original error with the file context applied
    fn with_file(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-backed errors carry a path to fill in
            match &mut error {
                PuzzleError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                PuzzleError::ImageExport { path, .. } | PuzzleError::WordList { path, .. } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_file(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidInput {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
