//! The puzzle dictionary
//!
//! Holds every eligible word of the configured length, in input order for
//! random selection and in a hash set for membership tests.

use super::loader;
use crate::core::Word;
use crate::error::GameError;
use crate::puzzle::EntropySource;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Filtered dictionary of fixed-length words
///
/// Read-only after construction; share it by reference across rounds.
#[derive(Debug, Clone)]
pub struct WordBank {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordBank {
    /// Create an empty bank for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            words: Vec::new(),
            index: FxHashSet::default(),
        }
    }

    /// Build a bank from raw dictionary lines
    ///
    /// Lines are trimmed and kept only when they form a word of exactly
    /// `word_length` letters. Repeated words are kept once, at their first
    /// position.
    ///
    /// # Examples
    /// ```
    /// use wordstack::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_lines(["apple", "angle", "pear", "Apple"], 5);
    /// assert_eq!(bank.len(), 2);
    /// assert!(bank.contains("ANGLE"));
    /// ```
    #[must_use]
    pub fn from_lines<I, S>(lines: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words(loader::words_from_lines(lines, word_length), word_length)
    }

    /// Build a bank from already-parsed words
    ///
    /// Words whose length differs from `word_length` are dropped.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>, word_length: usize) -> Self {
        let mut bank = Self::new(word_length);
        for word in words {
            bank.insert(word);
        }
        debug!("word bank holds {} words of length {word_length}", bank.len());
        bank
    }

    /// Load a dictionary file, falling back to an empty bank
    ///
    /// An unreadable file is not an error here: it is logged and the empty bank
    /// surfaces later as `GameError::EmptyBank` when a round tries to start.
    #[must_use]
    pub fn load_or_empty<P: AsRef<Path>>(path: P, word_length: usize) -> Self {
        let path = path.as_ref();
        match loader::load_from_file(path, word_length) {
            Ok(words) => Self::from_words(words, word_length),
            Err(err) => {
                warn!("could not load dictionary {}: {err}", path.display());
                Self::new(word_length)
            }
        }
    }

    fn insert(&mut self, word: Word) {
        if word.len() != self.word_length {
            return;
        }
        if self.index.insert(word.text().to_string()) {
            self.words.push(word);
        }
    }

    /// Pick a word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyBank` if the bank has no words.
    pub fn random_word<E: EntropySource + ?Sized>(&self, rng: &mut E) -> Result<&Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyBank);
        }
        Ok(&self.words[rng.pick(self.words.len())])
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&candidate.to_ascii_lowercase())
        } else {
            self.index.contains(candidate)
        }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, in input order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a given input position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::ScriptedEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn from_lines_filters_by_length_after_trim() {
        let bank = WordBank::from_lines(["apple ", " angle", "kiwi", "bananas", ""], 5);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.word_length(), 5);
        assert_eq!(bank.words()[0].text(), "apple");
        assert_eq!(bank.words()[1].text(), "angle");
    }

    #[test]
    fn from_lines_drops_duplicates_keeping_first() {
        let bank = WordBank::from_lines(["apple", "angle", "APPLE", "apple"], 5);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0).map(Word::text), Some("apple"));
    }

    #[test]
    fn contains_is_case_normalized() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        assert!(bank.contains("apple"));
        assert!(bank.contains("APPLE"));
        assert!(bank.contains(" Angle "));
        assert!(!bank.contains("angel"));
        assert!(!bank.contains("appl"));
    }

    #[test]
    fn random_word_empty_bank_errors() {
        let bank = WordBank::new(5);
        let mut rng = ScriptedEntropy::new(vec![0]);
        assert_eq!(bank.random_word(&mut rng), Err(GameError::EmptyBank));
    }

    #[test]
    fn random_word_uses_pick_as_index() {
        let bank = WordBank::from_lines(["apple", "angle", "crane"], 5);
        let mut rng = ScriptedEntropy::new(vec![2, 0]);
        assert_eq!(bank.random_word(&mut rng).unwrap().text(), "crane");
        assert_eq!(bank.random_word(&mut rng).unwrap().text(), "apple");
    }

    #[test]
    fn random_word_covers_whole_bank() {
        let bank = WordBank::from_lines(["apple", "angle", "crane"], 5);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(bank.random_word(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn load_or_empty_missing_file_gives_empty_bank() {
        let bank = WordBank::load_or_empty("/no/such/dictionary.txt", 5);
        assert!(bank.is_empty());
        assert_eq!(bank.word_length(), 5);
    }

    #[test]
    fn load_or_empty_reads_file() {
        let path = std::env::temp_dir().join(format!("wordstack-bank-{}.txt", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "apple\nangle\nfig\n").unwrap();
        }
        let bank = WordBank::load_or_empty(&path, 5);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(bank.len(), 2);
        assert!(bank.contains("angle"));
    }
}
