//! Terminal output formatting
//!
//! Display utilities for the board, verdicts and command results.

pub mod display;
pub mod formatters;

pub use display::{print_generate_result, write_board, write_verdict};
