//! The draw pile of unplaced tiles

use crate::core::LetterTile;
use crate::error::GameError;

/// Last-in-first-out pile of tiles waiting to be placed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileStack {
    tiles: Vec<LetterTile>,
}

impl TileStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Replace the pile with `tiles`, pushed in order (last one on top)
    pub fn load(&mut self, tiles: &[LetterTile]) {
        self.tiles.clear();
        self.tiles.extend_from_slice(tiles);
    }

    pub fn push(&mut self, tile: LetterTile) {
        self.tiles.push(tile);
    }

    /// Remove and return the top tile
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyStack` if the pile is empty.
    pub fn pop(&mut self) -> Result<LetterTile, GameError> {
        self.tiles.pop().ok_or(GameError::EmptyStack)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&LetterTile> {
        self.tiles.last()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Tiles from the top of the pile down
    pub fn iter_from_top(&self) -> impl Iterator<Item = &LetterTile> {
        self.tiles.iter().rev()
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
    fn push_pop_is_lifo() {
        let mut stack = TileStack::new();
        stack.push(tile(0, b'a'));
        stack.push(tile(1, b'b'));

        assert_eq!(stack.peek(), Some(&tile(1, b'b')));
        assert_eq!(stack.pop(), Ok(tile(1, b'b')));
        assert_eq!(stack.pop(), Ok(tile(0, b'a')));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_empty_is_error() {
        let mut stack = TileStack::new();
        assert_eq!(stack.pop(), Err(GameError::EmptyStack));
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn load_replaces_contents() {
        let mut stack = TileStack::new();
        stack.push(tile(9, b'z'));
        stack.load(&[tile(0, b'e'), tile(1, b'a')]);

        assert_eq!(stack.len(), 2);
        let from_top: Vec<char> = stack.iter_from_top().map(LetterTile::as_char).collect();
        assert_eq!(from_top, vec!['a', 'e']);
    }

    #[test]
    fn clear_empties() {
        let mut stack = TileStack::new();
        stack.load(&[tile(0, b'e'), tile(1, b'a')]);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }
}
