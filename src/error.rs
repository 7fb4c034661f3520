//! Game error taxonomy
//!
//! `EmptyBank` and `InsufficientWords` stop a round from starting. The rest are
//! ordinary interaction rejections: the engine refuses the action and leaves its
//! state untouched.

use crate::core::{SlotId, TileId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The dictionary has no eligible words
    EmptyBank,
    /// The dictionary has fewer than two distinct eligible words
    InsufficientWords { distinct: usize },
    /// The draw pile has no tiles left
    EmptyStack,
    /// The target slot already holds a full word
    SlotFull(SlotId),
    /// A dropped tile is buried under other tiles
    NotTopTile(TileId),
    /// No placement has been made since the round started
    NothingToUndo,
    /// No round has been started yet
    NoActiveRound,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "Dictionary is empty or could not be loaded"),
            Self::InsufficientWords { distinct } => write!(
                f,
                "Dictionary needs at least 2 distinct words, found {distinct}"
            ),
            Self::EmptyStack => write!(f, "No tiles left to place"),
            Self::SlotFull(slot) => write!(f, "Slot {slot} is already full"),
            Self::NotTopTile(tile) => write!(f, "Tile {tile} is not on top of the pile"),
            Self::NothingToUndo => write!(f, "Nothing to undo"),
            Self::NoActiveRound => write!(f, "No game in progress"),
        }
    }
}

impl std::error::Error for GameError {}

impl GameError {
    /// Whether this error prevents a round from starting at all
    #[must_use]
    pub const fn is_dictionary_error(&self) -> bool {
        matches!(self, Self::EmptyBank | Self::InsufficientWords { .. })
    }
}
