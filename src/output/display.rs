//! Display functions for the board and command results

use super::formatters::{slot_to_string, stack_to_string, verdict_message};
use crate::commands::GenerateResult;
use crate::core::SlotId;
use crate::game::{PlacementEngine, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Write the pile and both slots
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, engine: &PlacementEngine<'_>) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "  Pile:   {}",
        stack_to_string(engine.stack(), 12).bright_yellow().bold()
    )?;
    for slot in SlotId::ALL {
        let label = match slot {
            SlotId::Word1 => "Word 1",
            SlotId::Word2 => "Word 2",
        };
        writeln!(
            out,
            "  {label}: {}",
            slot_to_string(engine.slot(slot)).bright_white()
        )?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Write a validation result
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    let message = verdict_message(verdict);
    if verdict.is_correct() {
        writeln!(out, "\n{}\n", format!("🎉 {message}").green().bold())
    } else {
        writeln!(out, "\n{}\n", format!("❌ {message}").red().bold())
    }
}

/// Print puzzles from the `generate` command
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} letters per word)",
        "GENERATED PUZZLES".bright_cyan().bold(),
        result.word_length
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, puzzle) in result.puzzles.iter().enumerate() {
        println!(
            "\n{}. {}",
            i + 1,
            puzzle.scramble_text().to_uppercase().bright_yellow().bold()
        );
        if result.reveal {
            println!(
                "   Words: {} {}",
                puzzle.word1().text().to_uppercase(),
                puzzle.word2().text().to_uppercase()
            );
        }
    }
    println!();
}
