//! Checks a completed board against the dictionary

use super::slot::Slot;
use crate::puzzle::Puzzle;
use crate::wordlists::WordBank;

/// Outcome of checking two full slots
///
/// Any pair of dictionary words is accepted, not only the puzzle's own pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Both slots spell dictionary words
    Correct { word1: String, word2: String },
    /// At least one slot is not a dictionary word
    Incorrect {
        attempt: (String, String),
        expected: (String, String),
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// The two strings the player built
    #[must_use]
    pub fn attempt(&self) -> (&str, &str) {
        match self {
            Self::Correct { word1, word2 } => (word1.as_str(), word2.as_str()),
            Self::Incorrect { attempt, .. } => (attempt.0.as_str(), attempt.1.as_str()),
        }
    }
}

/// Validate both slots once they are full
///
/// Returns `None` unless both slots hold exactly the puzzle's word length.
#[must_use]
pub fn check_solved(
    word1_slot: &Slot,
    word2_slot: &Slot,
    bank: &WordBank,
    puzzle: &Puzzle,
) -> Option<Verdict> {
    let length = puzzle.word_length();
    if word1_slot.len() != length || word2_slot.len() != length {
        return None;
    }

    let word1 = word1_slot.text();
    let word2 = word2_slot.text();

    if bank.contains(&word1) && bank.contains(&word2) {
        Some(Verdict::Correct { word1, word2 })
    } else {
        Some(Verdict::Incorrect {
            attempt: (word1, word2),
            expected: (
                puzzle.word1().text().to_string(),
                puzzle.word2().text().to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterTile, SlotId, TileId, Word};

    fn slot_with(id: SlotId, text: &str) -> Slot {
        let mut slot = Slot::new(id, 5);
        for (i, letter) in text.bytes().enumerate() {
            slot.append(LetterTile::new(TileId(i as u32), letter)).unwrap();
        }
        slot
    }

    fn fixture() -> (WordBank, Puzzle) {
        let bank = WordBank::from_lines(["apple", "angle", "angel"], 5);
        let puzzle = Puzzle::new(
            Word::new("angle", 5).unwrap(),
            Word::new("apple", 5).unwrap(),
            b"aanpgpllee".to_vec(),
        );
        (bank, puzzle)
    }

    #[test]
    fn correct_when_both_in_bank() {
        let (bank, puzzle) = fixture();
        let verdict = check_solved(
            &slot_with(SlotId::Word1, "angle"),
            &slot_with(SlotId::Word2, "apple"),
            &bank,
            &puzzle,
        );
        assert_eq!(
            verdict,
            Some(Verdict::Correct {
                word1: "angle".to_string(),
                word2: "apple".to_string()
            })
        );
    }

    #[test]
    fn other_dictionary_words_are_accepted() {
        let (bank, puzzle) = fixture();
        let verdict = check_solved(
            &slot_with(SlotId::Word1, "apple"),
            &slot_with(SlotId::Word2, "angel"),
            &bank,
            &puzzle,
        )
        .unwrap();
        assert!(verdict.is_correct());
        assert_eq!(verdict.attempt(), ("apple", "angel"));
    }

    #[test]
    fn incorrect_exposes_expected_words() {
        let (bank, puzzle) = fixture();
        let verdict = check_solved(
            &slot_with(SlotId::Word1, "angle"),
            &slot_with(SlotId::Word2, "appel"),
            &bank,
            &puzzle,
        );
        assert_eq!(
            verdict,
            Some(Verdict::Incorrect {
                attempt: ("angle".to_string(), "appel".to_string()),
                expected: ("angle".to_string(), "apple".to_string()),
            })
        );
    }

    #[test]
    fn anagram_of_targets_is_incorrect() {
        let (_, puzzle) = fixture();
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let verdict = check_solved(
            &slot_with(SlotId::Word1, "angel"),
            &slot_with(SlotId::Word2, "appel"),
            &bank,
            &puzzle,
        )
        .unwrap();

        assert!(!verdict.is_correct());
        assert_eq!(verdict.attempt(), ("angel", "appel"));
        let Verdict::Incorrect { expected, .. } = verdict else {
            panic!("expected an incorrect verdict");
        };
        assert_eq!(expected, ("angle".to_string(), "apple".to_string()));
    }

    #[test]
    fn partial_slots_are_not_checked() {
        let (bank, puzzle) = fixture();
        assert_eq!(
            check_solved(
                &slot_with(SlotId::Word1, "angle"),
                &slot_with(SlotId::Word2, "appl"),
                &bank,
                &puzzle,
            ),
            None
        );
    }
}
