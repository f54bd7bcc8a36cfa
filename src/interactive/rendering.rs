//! TUI rendering with ratatui

use super::app::{App, InputMode};
use crate::shell::{MessageKind, gallows, mask_display, sound_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Gallows and word
            Constraint::Percentage(45), // Messages and statistics
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Save the Man")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = gallows(app.session.wrong_guesses())
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        mask_display(&app.session.revealed()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Wrong guesses: {}/{}",
        app.session.wrong_guesses(),
        crate::engine::MAX_WRONG_GUESSES
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Messages
            Constraint::Length(4), // Guessed letters
            Constraint::Length(6), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let color = match message.kind {
                MessageKind::Error => Color::Yellow,
                MessageKind::Wrong => Color::Red,
                MessageKind::Right => Color::Green,
            };
            ListItem::new(Line::from(Span::styled(
                message.text.clone(),
                Style::default().fg(color),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_guessed(f: &mut Frame, app: &App, area: Rect) {
    let guessed = app.session.guessed_display();
    let content = if guessed.is_empty() {
        Line::from(Span::styled(
            "(no letters guessed yet)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(guessed)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guessed Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let record = app.stats.record();
    let content = vec![
        Line::from(format!(
            "Victories: {}   Defeats: {}",
            record.victories, record.defeats
        )),
        Line::from(format!(
            "Win streak: {} (best {})",
            record.victories_in_row, record.max_victories_in_row
        )),
        Line::from(format!(
            "Loss streak: {} (worst {})",
            record.defeats_in_row, record.max_defeats_in_row
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (content, title) = match app.input_mode {
        InputMode::Playing => (
            Line::from(vec![
                Span::raw("> "),
                Span::styled(
                    app.input_buffer.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
            " Guess a Letter ",
        ),
        InputMode::GameOver => (
            Line::from(Span::styled(
                "Press Enter for a new game",
                Style::default().fg(Color::Cyan),
            )),
            " Game Over ",
        ),
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let sound = if app.prefs.sound_enabled() {
        app.last_sound.map_or("🔔 on", sound_label)
    } else {
        "🔕 off"
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw("Enter: guess  Esc: quit  Ctrl+S: sound  "),
        Span::styled(sound, Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, area);
}
