//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and status bar for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterResult, LetterState};
use crate::output::display::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🟩 {} #{}", app.label.to_uppercase(), app.session.day_index() + 1);
    let header = Paragraph::new(title)
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

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let rows = u16::try_from(app.session.max_attempts()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.saturating_add(2)), // Board
            Constraint::Min(5),                         // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile_style(result: LetterResult) -> Style {
    let bg = if result.correct {
        Color::Green
    } else if result.within {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let width = app.word_length();
    let empty = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line> = (0..app.session.max_attempts())
        .map(|row| {
            if let Some(attempt) = attempts.get(row) {
                let spans: Vec<Span> = attempt
                    .iter()
                    .map(|&result| {
                        Span::styled(format!(" {} ", result.letter.to_uppercase()), tile_style(result))
                    })
                    .collect();
                Line::from(spans)
            } else if row == attempts.len() && !app.session.is_ended() {
                // Row being typed
                let typed: Vec<char> = app.input_buffer.chars().collect();
                let spans: Vec<Span> = (0..width)
                    .map(|i| match typed.get(i) {
                        Some(c) => Span::styled(
                            format!(" {} ", c.to_uppercase()),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled(" · ", empty),
                    })
                    .collect();
                Line::from(spans)
            } else {
                Line::from(Span::styled(" · ".repeat(width), empty))
            }
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match keyboard.state(letter) {
                        Some(LetterState::Correct) => {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        }
                        Some(LetterState::Within) => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        Some(LetterState::Absent) => Style::default().fg(Color::DarkGray),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {} ", letter.to_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | 's' share | 'q' quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a word | Enter submit | TAB hard mode | ESC quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.hard_mode {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let lives_text = format!(
        "Guesses left: {}/{}",
        app.session.lives_remaining(),
        app.session.max_attempts()
    );
    let lives = Paragraph::new(lives_text).alignment(Alignment::Center);
    f.render_widget(lives, chunks[1]);

    let help = Paragraph::new("ESC: Quit | TAB: Hard Mode")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
