//! Game play: draw pile, target slots, placement engine and validation

pub mod engine;
pub mod session;
pub mod slot;
pub mod stack;
pub mod validator;

pub use engine::{EngineEvent, EngineState, Move, PlacementEngine};
pub use session::GameSession;
pub use slot::Slot;
pub use stack::TileStack;
pub use validator::{Verdict, check_solved};
