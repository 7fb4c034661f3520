//! Game configuration
//!
//! Resolved from command-line flags in `main`; shared by every command.

use crate::core::DEFAULT_WORD_LENGTH;
use crate::wordlists::{WordBank, embedded_bank};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// Word list compiled into the binary
    Embedded,
    /// Plain text file, one word per line
    File(PathBuf),
}

impl WordlistSource {
    /// Parse the `--wordlist` flag: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub wordlist: WordlistSource,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            wordlist: WordlistSource::Embedded,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the dictionary this configuration points at
    ///
    /// An unreadable file yields an empty bank.
    #[must_use]
    pub fn load_bank(&self) -> WordBank {
        let bank = match &self.wordlist {
            WordlistSource::Embedded => embedded_bank(self.word_length),
            WordlistSource::File(path) => WordBank::load_or_empty(path, self.word_length),
        };
        info!(
            "loaded {} words of length {} from {:?}",
            bank.len(),
            self.word_length,
            self.wordlist
        );
        bank
    }

    /// Random source for puzzle generation, seeded when a seed is configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::EntropySource;

    #[test]
    fn wordlist_from_arg() {
        assert_eq!(WordlistSource::from_arg("embedded"), WordlistSource::Embedded);
        assert_eq!(
            WordlistSource::from_arg("words.txt"),
            WordlistSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn default_config_uses_embedded_five_letter_words() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        let bank = config.load_bank();
        assert!(bank.len() >= 2);
        assert!(bank.words().iter().all(|w| w.len() == 5));
    }

    #[test]
    fn missing_file_gives_empty_bank() {
        let config = GameConfig {
            wordlist: WordlistSource::File(PathBuf::from("/missing/words.txt")),
            ..GameConfig::default()
        };
        assert!(config.load_bank().is_empty());
    }

    #[test]
    fn seeded_rng_repeats() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.pick(1000), b.pick(1000));
    }
}
