//! Normalized puzzle words

use crate::io::error::{Result, invalid_input};
use std::fmt;

/// A puzzle word stored as uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Uppercase and validate a raw word
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the word is empty or contains anything other
    /// than ASCII letters
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid_input("word", &raw, &"word is empty"));
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(invalid_input(
                "word",
                &raw,
                &format!("'{bad}' is not a letter in A-Z"),
            ));
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Number of letters
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Uppercase text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Letter bytes in reading order
    pub const fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
