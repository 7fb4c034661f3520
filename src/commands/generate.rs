//! Generate puzzles without playing them

use crate::error::GameError;
use crate::puzzle::{EntropySource, Puzzle, PuzzleGenerator};
use crate::wordlists::WordBank;

/// Configuration for the generate command
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub count: usize,
    /// Print the target words next to each scramble
    pub reveal: bool,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            reveal: false,
        }
    }
}

/// Result of the generate command
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub word_length: usize,
    pub reveal: bool,
    pub puzzles: Vec<Puzzle>,
}

/// Generate `config.count` puzzles from `bank`
///
/// # Errors
///
/// Returns the generator's error when the dictionary cannot supply two
/// distinct words.
pub fn generate_puzzles<E: EntropySource + ?Sized>(
    bank: &WordBank,
    rng: &mut E,
    config: &GenerateConfig,
) -> Result<GenerateResult, GameError> {
    let generator = PuzzleGenerator::new(bank);
    let puzzles = (0..config.count)
        .map(|_| generator.generate(&mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerateResult {
        word_length: bank.word_length(),
        reveal: config.reveal,
        puzzles,
    })
}
