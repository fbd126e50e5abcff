//! Display functions for boards, statistics and command results

use super::formatters::{attempt_to_emoji, create_progress_bar, share_text};
use crate::commands::CheckResult;
use crate::core::{Attempt, KeyboardState, LetterResult, LetterState};
use crate::game::{GameSession, GameStatus, Statistics};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the keyboard hint rows
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn tile(result: LetterResult) -> ColoredString {
    let text = format!(" {} ", result.letter.to_uppercase());
    if result.correct {
        text.black().on_green().bold()
    } else if result.within {
        text.black().on_yellow().bold()
    } else {
        text.white().on_bright_black()
    }
}

/// Render an attempt as colored letter tiles
#[must_use]
pub fn colored_attempt(attempt: &Attempt) -> String {
    attempt.iter().map(|&result| tile(result).to_string()).collect()
}

/// Render the keyboard with each guessed letter colored by its best state
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| {
                    let key = letter.to_uppercase().to_string();
                    match keyboard.state(letter) {
                        Some(LetterState::Correct) => key.black().on_green().to_string(),
                        Some(LetterState::Within) => key.black().on_yellow().to_string(),
                        Some(LetterState::Absent) => key.bright_black().to_string(),
                        None => key,
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print every attempt so far plus the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), colored_attempt(attempt));
    }
    println!("\n{}\n", colored_keyboard(&session.keyboard()));
}

/// Print the final result and the share text
pub fn print_game_over(session: &GameSession, label: &str) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let tries = session.attempts().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {tries} {}!",
                    if tries == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            session.secret().to_uppercase().bright_yellow().bold()
        ),
        GameStatus::InProgress => println!("{}", "Game in progress".bright_white()),
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_text(label, session));
}

/// Print player statistics with a guess distribution chart
pub fn print_statistics(statistics: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", statistics.games_played);
    println!(
        "   Win %:           {}",
        format!("{:.0}", statistics.win_percentage()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", statistics.current_streak);
    println!("   Max streak:      {}", statistics.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = statistics
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    for (i, &count) in statistics.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Render a one-shot evaluation
#[must_use]
pub fn format_check_result(result: &CheckResult) -> String {
    let mut lines = vec![
        format!(
            "  {} against {}",
            result.guess.to_uppercase().bold(),
            result.word.to_uppercase().bold()
        ),
        format!(
            "  {}  {}",
            colored_attempt(&result.attempt),
            attempt_to_emoji(&result.attempt)
        ),
    ];
    if let Some(violation) = result.violation {
        lines.push(format!("  {} {violation}", "Hard mode:".yellow().bold()));
    } else if result.previous.is_some() {
        lines.push(format!("  {}", "Hard mode: respects previous hints".green()));
    }
    lines.join("\n")
}

/// Print a one-shot evaluation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}\n", format_check_result(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn colored_attempt_keeps_letters() {
        colored::control::set_override(false);
        let attempt = evaluate("crane", "slate", None).unwrap();
        assert_eq!(colored_attempt(&attempt), " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let keyboard = KeyboardState::default();
        let rendered = colored_keyboard(&keyboard);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Q W E R T Y U I O P");
        assert_eq!(rows[2], "  Z X C V B N M");
    }

    #[test]
    fn check_result_names_guess_and_word() {
        colored::control::set_override(false);
        let result = crate::commands::check_guess("trust", "looks", Some("robot"), None).unwrap();
        let rendered = format_check_result(&result);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "  TRUST against LOOKS");
        assert!(lines[1].ends_with("⬛⬛⬛🟨⬛"));
        assert_eq!(lines[2], "  Hard mode: 2nd letter must be O");
    }
}
