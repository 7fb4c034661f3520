//! TUI application state and logic

use crate::core::SlotId;
use crate::game::{EngineEvent, GameSession};
use crate::output::formatters::verdict_message;
use crate::puzzle::EntropySource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, E> {
    pub session: GameSession<'a, E>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set once the current round has counted toward `rounds_solved`
    solved_counted: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_started: usize,
    pub rounds_solved: usize,
}

impl<'a, E: EntropySource> App<'a, E> {
    #[must_use]
    pub fn new(session: GameSession<'a, E>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Move each tile from the pile onto word 1 or word 2.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            solved_counted: false,
        }
    }

    pub fn new_game(&mut self) {
        if self.session.on_start_game() {
            self.drain_event();
        } else if let Some(err) = self.session.last_error() {
            self.add_message(&format!("Cannot start a game: {err}"), MessageStyle::Error);
        }
    }

    pub fn place(&mut self, slot: SlotId) {
        if self.session.on_place(slot) {
            self.drain_event();
        } else {
            self.report_rejection();
        }
    }

    pub fn undo_last(&mut self) {
        if self.session.on_undo() {
            self.drain_event();
        } else {
            self.report_rejection();
        }
    }

    /// Whether the current board has been filled and judged
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.session.engine().stack().is_empty() && self.session.engine().puzzle().is_some()
    }

    fn drain_event(&mut self) {
        match self.session.take_event() {
            Some(EngineEvent::GameStarted) => {
                self.stats.rounds_started += 1;
                self.solved_counted = false;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Some(EngineEvent::Validated(verdict)) => {
                let style = if verdict.is_correct() {
                    // Undo then re-place can validate the same round again
                    if !self.solved_counted {
                        self.stats.rounds_solved += 1;
                        self.solved_counted = true;
                    }
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&verdict_message(&verdict), style);
                self.add_message("Press 'n' for a new game or 'u' to undo.", MessageStyle::Info);
            }
            Some(EngineEvent::UndoAcknowledged) => {
                self.add_message("Undone!", MessageStyle::Info);
            }
            None => {}
        }
    }

    fn report_rejection(&mut self) {
        if let Some(err) = self.session.last_error() {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('u') | KeyCode::Backspace => self.undo_last(),
            KeyCode::Char('1') | KeyCode::Left => self.place(SlotId::Word1),
            KeyCode::Char('2') | KeyCode::Right => self.place(SlotId::Word2),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<E: EntropySource>(app: App<'_, E>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, E: EntropySource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, E>,
) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::ScriptedEntropy;
    use crate::wordlists::WordBank;

    fn app(bank: &WordBank) -> App<'_, ScriptedEntropy> {
        App::new(GameSession::new(bank, ScriptedEntropy::new(vec![0, 1])))
    }

    fn press(app: &mut App<'_, ScriptedEntropy>, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn solving_counts_in_stats() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        press(&mut app, "n1212121212");

        assert!(app.round_over());
        assert_eq!(app.stats.rounds_started, 1);
        assert_eq!(app.stats.rounds_solved, 1);
        assert!(app.messages.iter().any(|m| m.text == "Solved! ANGLE APPLE"));
    }

    #[test]
    fn resolving_after_undo_counts_once() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        press(&mut app, "n1212121212u2u2");

        assert_eq!(app.stats.rounds_started, 1);
        assert_eq!(app.stats.rounds_solved, 1);

        // A fresh round can be counted again
        press(&mut app, "n1212121212");
        assert_eq!(app.stats.rounds_started, 2);
        assert_eq!(app.stats.rounds_solved, 2);
    }

    #[test]
    fn arrow_keys_place_tiles() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        app.new_game();
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);

        let engine = app.session.engine();
        assert_eq!(engine.slot(SlotId::Word1).text(), "a");
        assert_eq!(engine.slot(SlotId::Word2).text(), "a");
        assert!(!app.round_over());
    }

    #[test]
    fn rejections_become_error_messages() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        press(&mut app, "nu");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Nothing to undo");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        press(&mut app, "nuuuuuuu");
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn quit_keys() {
        let bank = WordBank::from_lines(["apple", "angle"], 5);
        let mut app = app(&bank);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app2 = self::app(&bank);
        press(&mut app2, "q");
        assert!(app2.should_quit);
    }
}
