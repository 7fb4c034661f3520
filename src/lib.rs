//! Word Stack
//!
//! A two-word letter-tile puzzle. Two dictionary words are interleaved letter by
//! letter into one scrambled pile; the player moves tiles off the top of the pile
//! onto two target words until both spell dictionary words again.
//!
//! # Quick Start
//!
//! ```rust
//! use wordstack::core::SlotId;
//! use wordstack::game::{EngineEvent, PlacementEngine};
//! use wordstack::puzzle::ScriptedEntropy;
//! use wordstack::wordlists::WordBank;
//!
//! let bank = WordBank::from_lines(["apple", "angle"], 5);
//! let mut engine = PlacementEngine::new(&bank);
//! engine.start_game(&mut ScriptedEntropy::new(vec![0, 1])).unwrap();
//!
//! // Tiles surface as "aanpgpllee": alternate between the two words
//! for _ in 0..5 {
//!     engine.place(SlotId::Word1).unwrap();
//!     engine.place(SlotId::Word2).unwrap();
//! }
//!
//! let Some(EngineEvent::Validated(verdict)) = engine.take_last_event() else {
//!     panic!("board is full");
//! };
//! assert!(verdict.is_correct());
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Dictionary sources
pub mod wordlists;

// Puzzle generation
pub mod puzzle;

// Placement engine and validation
pub mod game;

// Runtime configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
