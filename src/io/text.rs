//! Plain-text puzzle sheets

use std::io::Write;
use std::path::Path;

use crate::io::error::{Result, WithContext};
use crate::puzzle::word_search::WordSearch;

/// Render the grid, a blank line, then the word legend
///
/// Grid letters are separated by single spaces; legend words by two spaces,
/// `words_per_row` to a line. A zero `words_per_row` puts every word on one
/// line.
pub fn render_text(puzzle: &WordSearch, words_per_row: usize) -> String {
    let mut sheet = String::new();

    for row in puzzle.letters().rows() {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        sheet.push_str(&line.join(" "));
        sheet.push('\n');
    }

    if puzzle.words().is_empty() {
        return sheet;
    }

    sheet.push('\n');
    let per_row = if words_per_row == 0 {
        puzzle.words().len()
    } else {
        words_per_row
    };
    for chunk in puzzle.words().chunks(per_row) {
        let line: Vec<&str> = chunk.iter().map(|word| word.as_str()).collect();
        sheet.push_str(&line.join("  "));
        sheet.push('\n');
    }

    sheet
}

/// Write the text sheet to any writer
///
/// # Errors
///
/// Returns `FileSystem` if writing fails
pub fn write_text<W: Write>(
    puzzle: &WordSearch,
    words_per_row: usize,
    writer: &mut W,
) -> Result<()> {
    writer
        .write_all(render_text(puzzle, words_per_row).as_bytes())
        .with_file("<output>", "write puzzle text")?;
    writer.flush().with_file("<output>", "flush puzzle text")
}

/// Save the text sheet to `output_path`, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be written
pub fn export_puzzle_as_text(
    puzzle: &WordSearch,
    words_per_row: usize,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_file(parent, "create directory")?;
    }

    std::fs::write(output_path, render_text(puzzle, words_per_row))
        .with_file(output_path, "write puzzle text")
}
