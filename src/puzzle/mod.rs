//! Puzzle generation
//!
//! Turns two dictionary words into one scrambled tile sequence.

pub mod entropy;
pub mod generator;

pub use entropy::{EntropySource, ScriptedEntropy};
pub use generator::{MAX_DRAW_ATTEMPTS, Puzzle, PuzzleGenerator, interleave};
