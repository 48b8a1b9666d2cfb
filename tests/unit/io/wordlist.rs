//! Tests for word-list file parsing

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tempfile::TempDir;
    use wordsearch::PuzzleError;
    use wordsearch::io::wordlist::{load_word_list, parse_word_list};

    // Tests comments and blank lines are skipped and words normalized
    // Verified by keeping comment lines
    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# animals\ncat\n\n  Dog  \n#bird\nowl\n";
        let words = parse_word_list(text, Path::new("animals.txt")).unwrap();
        let words: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        assert_eq!(words, vec!["CAT", "DOG", "OWL"]);
    }

    // Tests bad entries report their one-based line
    // Verified by using zero-based line numbers
    #[test]
    fn test_parse_reports_line_number() {
        let error = parse_word_list("cat\n\nice cream\n", Path::new("food.txt")).unwrap_err();
        match error {
            PuzzleError::WordList { path, line, reason } => {
                assert_eq!(path, Path::new("food.txt"));
                assert_eq!(line, 3);
                assert!(reason.contains("' '"));
            }
            other => unreachable!("Expected WordList error, got {other}"),
        }
    }

    // Tests loading from disk
    // Verified by parsing an empty string instead of the file
    #[test]
    fn test_load_word_list_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        std::fs::write(&path, "rust\ngo\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].as_str(), "GO");
    }

    // Tests a missing file becomes a file system error with its path
    // Verified by dropping the path context
    #[test]
    fn test_missing_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let error = load_word_list(&path).unwrap_err();
        assert!(matches!(error, PuzzleError::FileSystem { .. }));
        assert!(error.to_string().contains("missing.txt"));
    }

    // Tests an all-comment file yields no words
    // Verified by erroring on empty lists
    #[test]
    fn test_empty_list_allowed() {
        let words = parse_word_list("# nothing yet\n\n", Path::new("empty.txt")).unwrap();
        assert!(words.is_empty());
    }
}
