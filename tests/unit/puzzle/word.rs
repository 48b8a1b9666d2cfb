//! Tests for word normalization and validation

#[cfg(test)]
mod tests {
    use wordsearch::PuzzleError;
    use wordsearch::puzzle::word::Word;

    // Tests words are uppercased and trimmed
    // Verified by removing the uppercase conversion
    #[test]
    fn test_word_is_normalized() {
        let word = Word::new("  Rust\n").unwrap();
        assert_eq!(word.as_str(), "RUST");
        assert_eq!(word.letters(), b"RUST");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
        assert_eq!(word.to_string(), "RUST");
    }

    // Tests empty and blank words are rejected
    // Verified by removing the empty check
    #[test]
    fn test_empty_word_rejected() {
        assert!(matches!(
            Word::new(""),
            Err(PuzzleError::InvalidInput { parameter: "word", .. })
        ));
        assert!(Word::new("   ").is_err());
    }

    // Tests characters outside A-Z are rejected with the offending character
    // Verified by accepting any alphanumeric character
    #[test]
    fn test_non_letters_rejected() {
        let error = Word::new("R2D2").unwrap_err();
        assert!(error.to_string().contains("'2'"));
        assert!(Word::new("ice cream").is_err());
        assert!(Word::new("café").is_err());
    }

    // Tests case differences do not make distinct words
    // Verified by comparing the raw input
    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(Word::new("hello").unwrap(), Word::new("HeLLo").unwrap());
    }
}
