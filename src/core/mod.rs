//! Core domain types for the word stack puzzle
//!
//! This module contains the fundamental value types with no game logic attached.

mod tile;
mod word;

pub use tile::{LetterTile, SlotId, TileId};
pub use word::{Word, WordError};

/// Default number of letters in each puzzle word
pub const DEFAULT_WORD_LENGTH: usize = 5;
