//! Letter tiles and target slot identifiers

use std::fmt;

/// Identity of a tile within one puzzle
///
/// Two tiles carrying the same letter always have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single lowercase letter plus its identity
///
/// Pure data: presentation lives in `output` and `interactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterTile {
    id: TileId,
    letter: u8,
}

impl LetterTile {
    #[must_use]
    pub const fn new(id: TileId, letter: u8) -> Self {
        Self { id, letter }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// The letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.letter as char
    }
}

impl fmt::Display for LetterTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the two target slots the player fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Word1,
    Word2,
}

impl SlotId {
    /// Both slots, in display order
    pub const ALL: [Self; 2] = [Self::Word1, Self::Word2];

    /// Parse the user-facing slot number ("1" or "2")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "1" => Some(Self::Word1),
            "2" => Some(Self::Word2),
            _ => None,
        }
    }

    /// Zero-based index, for array storage
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Word1 => 0,
            Self::Word2 => 1,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word1 => write!(f, "word 1"),
            Self::Word2 => write!(f, "word 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_with_same_letter_are_distinct() {
        let a = LetterTile::new(TileId(0), b'p');
        let b = LetterTile::new(TileId(1), b'p');
        assert_eq!(a.letter(), b.letter());
        assert_ne!(a, b);
    }

    #[test]
    fn tile_display_is_letter() {
        let tile = LetterTile::new(TileId(7), b'q');
        assert_eq!(tile.to_string(), "q");
        assert_eq!(tile.id().to_string(), "#7");
    }

    #[test]
    fn slot_from_name() {
        assert_eq!(SlotId::from_name("1"), Some(SlotId::Word1));
        assert_eq!(SlotId::from_name(" 2 "), Some(SlotId::Word2));
        assert_eq!(SlotId::from_name("3"), None);
    }

    #[test]
    fn slot_index_matches_all_order() {
        for (i, slot) in SlotId::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
