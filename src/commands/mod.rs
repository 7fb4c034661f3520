//! Command implementations

pub mod generate;
pub mod simple;

pub use generate::{GenerateConfig, GenerateResult, generate_puzzles};
pub use simple::run_simple;
