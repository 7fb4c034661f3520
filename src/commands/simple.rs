//! Simple line-based play mode
//!
//! Text-based game loop without the TUI. Reads one command per line.

use crate::core::SlotId;
use crate::game::{EngineEvent, GameSession};
use crate::output::{write_board, write_verdict};
use crate::puzzle::EntropySource;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: '1' or '2' place the top tile on that word, 'u' undo, \
                    'n' new game, 'h' help, 'q' quit";

enum Command {
    Place(SlotId),
    Undo,
    NewGame,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        if let Some(slot) = SlotId::from_name(&input) {
            return Self::Place(slot);
        }
        match input.as_str() {
            "u" | "undo" => Self::Undo,
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(input),
        }
    }
}

/// Run the line-based game loop until quit or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<E, R, W>(
    session: &mut GameSession<'_, E>,
    mut reader: R,
    out: &mut W,
) -> io::Result<()>
where
    E: EntropySource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Word Stack: rebuild two words from one pile of letters.")?;
    writeln!(out, "{HELP}\n")?;

    if !start_round(session, out)? {
        return Ok(());
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match Command::parse(&line) {
            Command::Place(slot) => {
                if !session.on_place(slot) {
                    report_rejection(session, out)?;
                    continue;
                }
            }
            Command::Undo => {
                if !session.on_undo() {
                    report_rejection(session, out)?;
                    continue;
                }
            }
            Command::NewGame => {
                if !start_round(session, out)? {
                    return Ok(());
                }
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => {
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            Command::Unknown(input) => {
                writeln!(out, "Unknown command '{input}'. {HELP}")?;
                continue;
            }
        }

        report_event(session, out)?;
    }
}

fn start_round<E: EntropySource, W: Write>(
    session: &mut GameSession<'_, E>,
    out: &mut W,
) -> io::Result<bool> {
    if !session.on_start_game() {
        if let Some(err) = session.last_error() {
            writeln!(out, "Cannot start a game: {err}")?;
        }
        return Ok(false);
    }
    report_event(session, out)?;
    Ok(true)
}

fn report_event<E: EntropySource, W: Write>(
    session: &mut GameSession<'_, E>,
    out: &mut W,
) -> io::Result<()> {
    match session.take_event() {
        Some(EngineEvent::GameStarted) => writeln!(out, "Game started")?,
        Some(EngineEvent::UndoAcknowledged) => writeln!(out, "Undone")?,
        Some(EngineEvent::Validated(verdict)) => {
            write_verdict(out, &verdict)?;
            writeln!(out, "Press 'n' for a new game or 'u' to rethink a placement.")?;
        }
        None => {}
    }
    write_board(out, session.engine())
}

fn report_rejection<E: EntropySource, W: Write>(
    session: &GameSession<'_, E>,
    out: &mut W,
) -> io::Result<()> {
    match session.last_error() {
        Some(err) => writeln!(out, "{err}"),
        None => Ok(()),
    }
}
