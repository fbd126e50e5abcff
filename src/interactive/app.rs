//! TUI application state and logic

use crate::game::{GameSession, GameStatus};
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'w> {
    pub session: GameSession<'w>,
    pub label: String,
    pub hard_mode: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
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

impl<'w> App<'w> {
    #[must_use]
    pub fn new(session: GameSession<'w>, label: impl Into<String>, hard_mode: bool) -> Self {
        let mut app = Self {
            session,
            label: label.into(),
            hard_mode,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        app.add_message(
            &format!(
                "Guess the word in {} tries. TAB toggles hard mode.",
                app.session.max_attempts()
            ),
            MessageStyle::Info,
        );
        if app.session.is_ended() {
            app.finish();
        } else if !app.session.attempts().is_empty() {
            app.add_message("Welcome back! Your progress was restored.", MessageStyle::Info);
        }
        app
    }

    /// Letters per guess
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.secret().chars().count()
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_alphabetic() && self.input_buffer.chars().count() < self.word_length() {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit(&mut self) {
        let guess = self.input_buffer.clone();
        match self.session.submit_guess(&guess, self.hard_mode).map(|_| ()) {
            Ok(()) => {
                self.input_buffer.clear();
                if self.session.is_ended() {
                    self.finish();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_hard_mode(&mut self) {
        self.hard_mode = !self.hard_mode;
        let state = if self.hard_mode { "on" } else { "off" };
        self.add_message(&format!("Hard mode {state}"), MessageStyle::Info);
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::Finished;
        match self.session.status() {
            GameStatus::Won => {
                let celebration = match self.session.attempts().len() {
                    1 => "🎯 Genius!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let word = self.session.secret().to_uppercase();
                self.add_message(&format!("The word was {word}"), MessageStyle::Error);
            }
            GameStatus::InProgress => {}
        }
        self.add_message("Press 's' to show share text or 'q' to quit.", MessageStyle::Info);
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(&self.label, &self.session)
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("\n{share}\n"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text when the player quits a finished game
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('s') => {
                        let share = app.share_text();
                        app.add_message(&share, MessageStyle::Info);
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => app.toggle_hard_mode(),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => app.pop_letter(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.is_ended().then(|| app.share_text()))
}
