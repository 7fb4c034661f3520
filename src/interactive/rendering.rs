//! TUI rendering with ratatui
//!
//! Draws the pile, both target words and the message log.

use super::app::{App, MessageStyle};
use crate::core::SlotId;
use crate::game::Slot;
use crate::output::formatters::EMPTY_CELL;
use crate::puzzle::EntropySource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<E: EntropySource>(f: &mut Frame, app: &App<'_, E>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Pile
            Constraint::Length(8), // Target words
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_pile(f, app, chunks[1]);
    render_slots(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧱 WORD STACK")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_span(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_pile<E: EntropySource>(f: &mut Frame, app: &App<'_, E>, area: Rect) {
    let stack = app.session.engine().stack();

    let mut spans = Vec::with_capacity(stack.len() + 1);
    for (i, tile) in stack.iter_from_top().enumerate() {
        let style = if i == 0 {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(tile_span(tile.as_char(), style));
        spans.push(Span::raw(" "));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Pile ({} left) ", stack.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn slot_line(slot: &Slot) -> Line<'static> {
    let filled = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let open = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(slot.capacity() * 2);
    for position in 0..slot.capacity() {
        match slot.tiles().get(position) {
            Some(tile) => spans.push(tile_span(tile.as_char(), filled)),
            None => spans.push(tile_span(EMPTY_CELL, open)),
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_slots<E: EntropySource>(f: &mut Frame, app: &App<'_, E>, area: Rect) {
    let engine = app.session.engine();
    let color = match engine.validate() {
        Some(verdict) if verdict.is_correct() => Color::Green,
        Some(_) => Color::Red,
        None => Color::Blue,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (slot_id, chunk) in SlotId::ALL.into_iter().zip(chunks.iter()) {
        let key = match slot_id {
            SlotId::Word1 => "1/←",
            SlotId::Word2 => "2/→",
        };
        let paragraph = Paragraph::new(slot_line(engine.slot(slot_id)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {} [{key}] ", capitalize(&slot_id.to_string())))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .style(Style::default().fg(color)),
            );
        f.render_widget(paragraph, *chunk);
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn render_messages<E: EntropySource>(f: &mut Frame, app: &App<'_, E>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<E: EntropySource>(f: &mut Frame, app: &App<'_, E>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Solved: {}",
        app.stats.rounds_started, app.stats.rounds_solved
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let moves_text = format!("Placed: {}", app.session.engine().history().len());
    let moves = Paragraph::new(moves_text).alignment(Alignment::Center);
    f.render_widget(moves, chunks[1]);

    let help = Paragraph::new("1/2: Place | u: Undo | n: New | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
