//! Placement state machine
//!
//! Owns the draw pile, both target slots and the move history for one round.
//! Every placement pops the top tile into a slot and records a `Move`; every
//! undo reverses the most recent `Move` exactly, tile identity included.

use super::slot::Slot;
use super::stack::TileStack;
use super::validator::{Verdict, check_solved};
use crate::core::{LetterTile, SlotId};
use crate::error::GameError;
use crate::puzzle::{EntropySource, Puzzle, PuzzleGenerator};
use crate::wordlists::WordBank;
use log::{debug, info};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No round has been started
    Idle,
    /// Tiles remain on the pile
    InProgress,
    /// Both slots are full and have been validated
    AwaitingValidation,
}

/// A placement record: `tile` left the pile for `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub tile: LetterTile,
    pub target: SlotId,
}

/// Notifications produced for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GameStarted,
    /// The last tile was placed; carries the validation result
    Validated(Verdict),
    UndoAcknowledged,
}

#[derive(Debug, Clone)]
pub struct PlacementEngine<'a> {
    generator: PuzzleGenerator<'a>,
    state: EngineState,
    puzzle: Option<Puzzle>,
    stack: TileStack,
    slots: [Slot; 2],
    history: Vec<Move>,
    last_event: Option<EngineEvent>,
}

impl<'a> PlacementEngine<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        let capacity = bank.word_length();
        Self {
            generator: PuzzleGenerator::new(bank),
            state: EngineState::Idle,
            puzzle: None,
            stack: TileStack::new(),
            slots: [
                Slot::new(SlotId::Word1, capacity),
                Slot::new(SlotId::Word2, capacity),
            ],
            history: Vec::new(),
            last_event: None,
        }
    }

    /// Start a new round with a freshly generated puzzle
    ///
    /// Legal from any state. On error the current round is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates `EmptyBank` / `InsufficientWords` from the generator.
    pub fn start_game<E: EntropySource + ?Sized>(&mut self, rng: &mut E) -> Result<(), GameError> {
        let puzzle = self.generator.generate(rng)?;
        self.load_puzzle(puzzle);
        Ok(())
    }

    /// Start a new round with a given puzzle
    pub fn load_puzzle(&mut self, puzzle: Puzzle) {
        let capacity = puzzle.word_length();
        for slot in &mut self.slots {
            slot.reset(capacity);
        }
        self.history.clear();
        self.stack.load(puzzle.tiles());
        info!(
            "new round: {} tiles, {} letters per word",
            puzzle.tiles().len(),
            capacity
        );
        debug!("targets are {} and {}", puzzle.word1(), puzzle.word2());
        self.puzzle = Some(puzzle);
        self.state = EngineState::InProgress;
        self.last_event = Some(EngineEvent::GameStarted);
    }

    /// Move the top tile of the pile into `target`
    ///
    /// When this empties the pile, the board is validated and the verdict is
    /// stored as the last event. Any other placement clears the pending event.
    ///
    /// # Errors
    ///
    /// - `NoActiveRound` before the first round
    /// - `EmptyStack` when no tiles remain
    /// - `SlotFull(target)` when `target` already holds a full word; the tile stays on the pile
    pub fn place(&mut self, target: SlotId) -> Result<Move, GameError> {
        if self.puzzle.is_none() {
            return Err(GameError::NoActiveRound);
        }
        if self.stack.is_empty() {
            return Err(GameError::EmptyStack);
        }
        if self.slots[target.index()].is_full() {
            return Err(GameError::SlotFull(target));
        }

        let tile = self.stack.pop()?;
        self.slots[target.index()].append(tile)?;
        let mv = Move { tile, target };
        self.history.push(mv);
        self.last_event = None;
        debug!("placed '{tile}' {} on {target}", tile.id());

        if self.stack.is_empty() {
            self.state = EngineState::AwaitingValidation;
            if let Some(verdict) = self.validate() {
                debug!("board complete, correct: {}", verdict.is_correct());
                self.last_event = Some(EngineEvent::Validated(verdict));
            }
        }

        Ok(mv)
    }

    /// Reverse the most recent placement
    ///
    /// # Errors
    ///
    /// Returns `NothingToUndo` when no placement has been made this round.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let mv = self.history.pop().ok_or(GameError::NothingToUndo)?;
        let removed = self.slots[mv.target.index()].remove_last();
        debug_assert_eq!(removed, Some(mv.tile), "slots unwind in history order");
        self.stack.push(mv.tile);
        self.state = EngineState::InProgress;
        self.last_event = Some(EngineEvent::UndoAcknowledged);
        debug!("undid '{}' {} from {}", mv.tile, mv.tile.id(), mv.target);
        Ok(mv)
    }

    /// Validate the current board
    ///
    /// `None` unless both slots are full.
    #[must_use]
    pub fn validate(&self) -> Option<Verdict> {
        let puzzle = self.puzzle.as_ref()?;
        check_solved(
            &self.slots[0],
            &self.slots[1],
            self.generator.bank(),
            puzzle,
        )
    }

    /// Whether `place(target)` would be accepted
    #[must_use]
    pub fn can_place(&self, target: SlotId) -> bool {
        self.puzzle.is_some() && !self.stack.is_empty() && !self.slots[target.index()].is_full()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Take the event produced by the most recent successful action
    pub fn take_last_event(&mut self) -> Option<EngineEvent> {
        self.last_event.take()
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub const fn stack(&self) -> &TileStack {
        &self.stack
    }

    #[must_use]
    pub const fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.generator.bank()
    }
}
