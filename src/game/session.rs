//! UI-facing event surface
//!
//! Every input modality (keyboard, line input, drag-and-drop) funnels into
//! the same three calls. Each returns whether the action was accepted; the
//! engine's reason for a rejection is logged rather than returned.

use super::engine::{EngineEvent, Move, PlacementEngine};
use crate::core::{LetterTile, SlotId, TileId};
use crate::error::GameError;
use crate::puzzle::EntropySource;
use crate::wordlists::WordBank;
use log::{debug, warn};

/// A placement engine bundled with its entropy source
pub struct GameSession<'a, E> {
    engine: PlacementEngine<'a>,
    rng: E,
    last_error: Option<GameError>,
}

impl<'a, E: EntropySource> GameSession<'a, E> {
    #[must_use]
    pub fn new(bank: &'a WordBank, rng: E) -> Self {
        Self {
            engine: PlacementEngine::new(bank),
            rng,
            last_error: None,
        }
    }

    /// Start a new round
    ///
    /// Returns `false` when the dictionary cannot supply two distinct words.
    pub fn on_start_game(&mut self) -> bool {
        let result = self.engine.start_game(&mut self.rng);
        if let Err(err) = &result {
            warn!("cannot start game: {err}");
        }
        self.record(result)
    }

    /// A tile was dropped onto a slot
    ///
    /// Only the tile on top of the pile can be dragged, so drops of any other
    /// tile are rejected.
    pub fn on_drop(&mut self, tile: TileId, target: SlotId) -> bool {
        match self.engine.stack().peek().map(LetterTile::id) {
            Some(top) if top == tile => self.on_place(target),
            Some(top) => {
                debug!("rejected drop of {tile}: top of pile is {top}");
                self.record::<Move>(Err(GameError::NotTopTile(tile)))
            }
            None => self.record::<Move>(Err(GameError::EmptyStack)),
        }
    }

    /// Place the top tile on `target`
    pub fn on_place(&mut self, target: SlotId) -> bool {
        let result = self.engine.place(target);
        self.record(result)
    }

    /// Undo the most recent placement
    pub fn on_undo(&mut self) -> bool {
        let result = self.engine.undo();
        self.record(result)
    }

    /// Drain the event produced by the last accepted action
    pub fn take_event(&mut self) -> Option<EngineEvent> {
        self.engine.take_last_event()
    }

    /// Reason the most recent action was rejected, if it was
    #[must_use]
    pub const fn last_error(&self) -> Option<GameError> {
        self.last_error
    }

    #[must_use]
    pub const fn engine(&self) -> &PlacementEngine<'a> {
        &self.engine
    }

    fn record<T>(&mut self, result: Result<T, GameError>) -> bool {
        match result {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                debug!("action rejected: {err}");
                self.last_error = Some(err);
                false
            }
        }
    }
}
