//! Dictionary word representation
//!
//! A Word stores a fixed-length, lowercase ASCII word as both text and bytes.

use std::fmt;

/// A dictionary word of a fixed length
///
/// Words are normalized to lowercase on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordstack::core::Word;
    ///
    /// let word = Word::new("Apple", 5).unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("apples", 5).is_err());
    /// assert!(Word::new("app1e", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        // ASCII, so byte length is letter count
        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per letter
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
