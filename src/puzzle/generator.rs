//! Puzzle generation
//!
//! Picks two distinct words and interleaves their letters into one scrambled
//! sequence. The sequence is reversed into tile order so that, once pushed onto
//! the draw pile, the tiles surface in scramble order.

use super::EntropySource;
use crate::core::{LetterTile, TileId, Word};
use crate::error::GameError;
use crate::wordlists::WordBank;
use log::{debug, warn};

/// Redraws allowed when the second word collides with the first
pub const MAX_DRAW_ATTEMPTS: usize = 32;

/// One round's words and their scrambled tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    word1: Word,
    word2: Word,
    scramble: Vec<u8>,
    tiles: Vec<LetterTile>,
}

impl Puzzle {
    /// Build a puzzle from two words and an already interleaved scramble
    ///
    /// Tile ids are assigned in load order: `tiles[0]` is the bottom of the pile.
    #[must_use]
    pub fn new(word1: Word, word2: Word, scramble: Vec<u8>) -> Self {
        let tiles = scramble
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &letter)| LetterTile::new(TileId(i as u32), letter))
            .collect();
        Self {
            word1,
            word2,
            scramble,
            tiles,
        }
    }

    #[must_use]
    pub const fn word1(&self) -> &Word {
        &self.word1
    }

    #[must_use]
    pub const fn word2(&self) -> &Word {
        &self.word2
    }

    /// Letters in the order the player draws them
    #[must_use]
    pub fn scramble(&self) -> &[u8] {
        &self.scramble
    }

    /// Scramble as text
    #[must_use]
    pub fn scramble_text(&self) -> String {
        self.scramble.iter().map(|&b| b as char).collect()
    }

    /// Tiles in push order, bottom of the pile first
    #[must_use]
    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    /// Letters per word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word1.len()
    }
}

/// Merge two words letter by letter, keeping each word's internal order
///
/// While both words have letters left, a fair coin (`pick(2) == 0` takes from
/// `word1`) decides which word supplies the next letter. The remainder of
/// whichever word is left over is appended verbatim.
///
/// # Examples
/// ```
/// use wordstack::core::Word;
/// use wordstack::puzzle::{ScriptedEntropy, interleave};
///
/// let angle = Word::new("angle", 5).unwrap();
/// let apple = Word::new("apple", 5).unwrap();
/// let mut coin = ScriptedEntropy::new(vec![0, 1]);
/// assert_eq!(interleave(&angle, &apple, &mut coin), b"aanpgpllee");
/// ```
pub fn interleave<E: EntropySource + ?Sized>(word1: &Word, word2: &Word, rng: &mut E) -> Vec<u8> {
    let (first, second) = (word1.letters(), word2.letters());
    let mut scramble = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        if rng.pick(2) == 0 {
            scramble.push(first[i]);
            i += 1;
        } else {
            scramble.push(second[j]);
            j += 1;
        }
    }

    scramble.extend_from_slice(&first[i..]);
    scramble.extend_from_slice(&second[j..]);
    scramble
}

/// Generates puzzles from a borrowed dictionary
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    bank: &'a WordBank,
}

impl<'a> PuzzleGenerator<'a> {
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }

    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Generate a fresh puzzle
    ///
    /// `word2` is drawn first, then `word1` is redrawn until it differs.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyBank` if the dictionary has no words
    /// - `GameError::InsufficientWords` if it has fewer than two distinct words
    pub fn generate<E: EntropySource + ?Sized>(&self, rng: &mut E) -> Result<Puzzle, GameError> {
        let (word1, word2) = self.pick_pair(rng)?;
        let scramble = interleave(word1, word2, rng);
        debug!(
            "generated puzzle {word1}/{word2} scrambled as {}",
            String::from_utf8_lossy(&scramble)
        );
        Ok(Puzzle::new(word1.clone(), word2.clone(), scramble))
    }

    /// Draw two distinct words as `(word1, word2)`
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleGenerator::generate`].
    pub fn pick_pair<E: EntropySource + ?Sized>(
        &self,
        rng: &mut E,
    ) -> Result<(&'a Word, &'a Word), GameError> {
        let bank = self.bank;
        if bank.is_empty() {
            return Err(GameError::EmptyBank);
        }
        if bank.len() < 2 {
            warn!("dictionary has a single eligible word, cannot build a puzzle");
            return Err(GameError::InsufficientWords {
                distinct: bank.len(),
            });
        }

        let word2 = bank.random_word(rng)?;
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let word1 = bank.random_word(rng)?;
            if word1 != word2 {
                return Ok((word1, word2));
            }
        }

        // Unlucky streak: take the first distinct word after a random offset.
        let words = bank.words();
        let offset = rng.pick(words.len());
        let word1 = (0..words.len())
            .map(|k| &words[(offset + k) % words.len()])
            .find(|w| *w != word2)
            .ok_or(GameError::InsufficientWords { distinct: 1 })?;
        Ok((word1, word2))
    }
}
