//! Fixed-capacity target slots

use crate::core::{LetterTile, SlotId};
use crate::error::GameError;

/// Ordered tiles placed toward one target word
///
/// Grows by appending during play and shrinks only from the end on undo.
/// Never holds more than `capacity` tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    capacity: usize,
    tiles: Vec<LetterTile>,
}

impl Slot {
    #[must_use]
    pub fn new(id: SlotId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            tiles: Vec::with_capacity(capacity),
        }
    }

    /// Append a tile
    ///
    /// # Errors
    ///
    /// Returns `GameError::SlotFull` without taking the tile if the slot is full.
    pub fn append(&mut self, tile: LetterTile) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::SlotFull(self.id));
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Remove the most recently appended tile
    pub fn remove_last(&mut self) -> Option<LetterTile> {
        self.tiles.pop()
    }

    /// Reset capacity for a new round and drop all tiles
    pub fn reset(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.tiles.clear();
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.capacity
    }

    #[must_use]
    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    #[must_use]
    pub fn last(&self) -> Option<&LetterTile> {
        self.tiles.last()
    }

    /// Letters in placement order
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(LetterTile::as_char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn tile(id: u32, letter: u8) -> LetterTile {
        LetterTile::new(TileId(id), letter)
    }

    #[test]
    fn append_until_full() {
        let mut slot = Slot::new(SlotId::Word1, 2);
        assert!(slot.append(tile(0, b'h')).is_ok());
        assert!(slot.append(tile(1, b'i')).is_ok());
        assert!(slot.is_full());
        assert_eq!(
            slot.append(tile(2, b'x')),
            Err(GameError::SlotFull(SlotId::Word1))
        );
        assert_eq!(slot.len(), 2);
        assert_eq!(slot.text(), "hi");
    }

    #[test]
    fn remove_last_is_lifo() {
        let mut slot = Slot::new(SlotId::Word2, 3);
        slot.append(tile(0, b'a')).unwrap();
        slot.append(tile(1, b'b')).unwrap();

        assert_eq!(slot.remove_last(), Some(tile(1, b'b')));
        assert_eq!(slot.last(), Some(&tile(0, b'a')));
        assert_eq!(slot.remove_last(), Some(tile(0, b'a')));
        assert_eq!(slot.remove_last(), None);
    }

    #[test]
    fn reset_changes_capacity() {
        let mut slot = Slot::new(SlotId::Word1, 5);
        slot.append(tile(0, b'a')).unwrap();
        slot.reset(4);
        assert!(slot.is_empty());
        assert_eq!(slot.capacity(), 4);
    }
}
