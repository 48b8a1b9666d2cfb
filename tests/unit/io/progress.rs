//! Tests for word placement progress tracking

#[cfg(test)]
mod tests {
    use wordsearch::io::progress::ProgressManager;

    // Tests a full placement cycle advances the bar once per word
    // Verified by incrementing twice per word
    #[test]
    fn test_progress_counts_words() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(3);

        for (index, word) in ["CAT", "DOG", "OWL"].iter().enumerate() {
            pm.start_word(index, word);
            pm.complete_word();
        }

        assert_eq!(pm.position(), 3);
        pm.finish();
    }

    // Tests re-initializing resets the position
    // Verified by keeping the previous position
    #[test]
    fn test_initialize_resets_position() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(2);
        pm.complete_word();
        pm.initialize(5);
        assert_eq!(pm.position(), 0);
    }

    // Tests default construction behaves like new
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm1 = ProgressManager::new();
        let mut pm2 = ProgressManager::default();

        pm1.initialize(1);
        pm2.initialize(1);
        pm1.start_word(0, "GO");
        pm2.start_word(0, "GO");
        pm1.complete_word();
        pm2.complete_word();

        assert_eq!(pm1.position(), pm2.position());
        pm1.finish();
        pm2.finish();
    }

    // Tests zero words is handled
    // Verified by panicking on zero-length bars
    #[test]
    fn test_zero_words() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();
        assert_eq!(pm.position(), 0);
    }
}
