//! Formatting utilities for terminal output

use crate::game::{Slot, TileStack, Verdict};

/// Placeholder shown for an empty slot position
pub const EMPTY_CELL: char = '_';

/// Format a slot as spaced uppercase letters, padding open positions
///
/// `"ang"` in a 5-letter slot renders as `"A N G _ _"`.
#[must_use]
pub fn slot_to_string(slot: &Slot) -> String {
    let mut cells: Vec<char> = slot
        .tiles()
        .iter()
        .map(|tile| tile.as_char().to_ascii_uppercase())
        .collect();
    cells.resize(slot.capacity(), EMPTY_CELL);
    join_cells(&cells)
}

/// Format the draw pile from the top down
///
/// Shows at most `limit` tiles and summarizes the rest.
#[must_use]
pub fn stack_to_string(stack: &TileStack, limit: usize) -> String {
    if stack.is_empty() {
        return "(empty)".to_string();
    }
    let cells: Vec<char> = stack
        .iter_from_top()
        .take(limit)
        .map(|tile| tile.as_char().to_ascii_uppercase())
        .collect();
    let mut text = join_cells(&cells);
    if stack.len() > limit {
        text.push_str(&format!(" (+{})", stack.len() - limit));
    }
    text
}

/// One-line message for a validation result
#[must_use]
pub fn verdict_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct { word1, word2 } => format!(
            "Solved! {} {}",
            word1.to_uppercase(),
            word2.to_uppercase()
        ),
        Verdict::Incorrect { attempt, expected } => format!(
            "Not words: {} {}. The answer was {} {}",
            attempt.0.to_uppercase(),
            attempt.1.to_uppercase(),
            expected.0.to_uppercase(),
            expected.1.to_uppercase()
        ),
    }
}

fn join_cells(cells: &[char]) -> String {
    let mut result = String::with_capacity(cells.len() * 2);
    for (i, c) in cells.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*c);
    }
    result
}
