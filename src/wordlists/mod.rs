//! Dictionary sources for the puzzle
//!
//! Provides the embedded default word list, file loading and the `WordBank`.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{WORDS, WORDS_COUNT};

/// Build a bank from the embedded word list
#[must_use]
pub fn embedded_bank(word_length: usize) -> WordBank {
    WordBank::from_lines(WORDS.iter(), word_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_bank_supports_default_length() {
        let bank = embedded_bank(5);
        assert!(bank.len() >= 2, "need two distinct words to start a round");
        assert!(bank.contains("apple"));
        assert!(bank.contains("angle"));
    }

    #[test]
    fn embedded_bank_other_lengths() {
        assert!(embedded_bank(4).len() >= 2);
        assert!(embedded_bank(6).len() >= 2);
        assert!(embedded_bank(12).is_empty());
    }
}
