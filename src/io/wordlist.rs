//! Word-list files: one word per line, `#` comments and blank lines skipped

use std::path::Path;

use crate::io::configuration::WORD_LIST_COMMENT;
use crate::io::error::{PuzzleError, Result, WithContext};
use crate::puzzle::word::Word;

/// Parse word-list text, reporting bad entries against `path`
///
/// # Errors
///
/// Returns `WordList` for the first line that is not a single word of letters
pub fn parse_word_list(text: &str, path: &Path) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with(WORD_LIST_COMMENT) {
            continue;
        }

        let word = Word::new(entry).map_err(|error| PuzzleError::WordList {
            path: path.to_path_buf(),
            line: index + 1,
            reason: match error {
                PuzzleError::InvalidInput { reason, .. } => reason,
                other => other.to_string(),
            },
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Read and parse a word-list file
///
/// # Errors
///
/// Returns:
/// - `FileSystem` if the file cannot be read
/// - `WordList` if an entry is not a word
pub fn load_word_list(path: &Path) -> Result<Vec<Word>> {
    let text = std::fs::read_to_string(path).with_file(path, "read word list")?;
    parse_word_list(&text, path)
}
