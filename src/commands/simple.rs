//! Simple line-based game mode
//!
//! Text-based game loop without the TUI. Guesses are typed one per line;
//! lines starting with `:` are commands.

use crate::game::{GameSession, GameStatus};
use crate::output::display::{colored_attempt, colored_keyboard};
use crate::output::formatters::share_text;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: :hard to toggle hard mode, :share to show the share text, :quit to exit";

/// Run the simple game loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut GameSession, label: &str, hard_mode: bool) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, label, hard_mode, stdin.lock(), io::stdout())
}

/// Run the game loop on arbitrary input and output streams
///
/// Returns when the game ends, the player quits, or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut GameSession,
    label: &str,
    mut hard_mode: bool,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║{:^42}║", format!("{label} #{}", session.day_index() + 1))?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        session.secret().chars().count(),
        session.max_attempts()
    )?;
    writeln!(out, "{HELP}\n")?;

    if !session.attempts().is_empty() {
        writeln!(out, "Resuming today's game:")?;
        write_board(&mut out, session)?;
    }

    let mut line = String::new();
    loop {
        if session.is_ended() {
            write_game_over(&mut out, session, label)?;
            return Ok(());
        }

        write!(
            out,
            "Guess {}/{}{}: ",
            session.attempts().len() + 1,
            session.max_attempts(),
            if hard_mode { " (hard)" } else { "" }
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Progress saved. See you tomorrow!\n")?;
                return Ok(());
            }
            ":hard" => {
                hard_mode = !hard_mode;
                let state = if hard_mode { "on" } else { "off" };
                writeln!(out, "Hard mode {state}")?;
            }
            ":share" => writeln!(out, "\n{}\n", share_text(label, session))?,
            ":help" => writeln!(out, "{HELP}")?,
            guess => match session.submit_guess(guess, hard_mode) {
                Ok(attempt) => {
                    log::debug!("Accepted {}", attempt.word());
                    write_board(&mut out, session)?;
                }
                Err(err) => writeln!(out, "  {} {}", "✗".red().bold(), err.to_string().red())?,
            },
        }
    }
}

fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    for attempt in session.attempts() {
        writeln!(out, "  {}", colored_attempt(attempt))?;
    }
    writeln!(out, "\n{}\n", colored_keyboard(&session.keyboard()))
}

fn write_game_over<W: Write>(out: &mut W, session: &GameSession, label: &str) -> io::Result<()> {
    match session.status() {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!("🎉 Solved in {}!", session.attempts().len())
                .bright_green()
                .bold()
        )?,
        GameStatus::Lost => writeln!(
            out,
            "{} {}",
            "❌ The word was".red().bold(),
            session.secret().to_uppercase().bright_yellow().bold()
        )?,
        GameStatus::InProgress => {}
    }
    writeln!(out, "\n{}\n", share_text(label, session))
}
