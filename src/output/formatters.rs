//! Formatting utilities for game results

use crate::core::{Attempt, LetterResult};
use crate::game::{GameSession, GameStatus};

pub const CORRECT_GLYPH: char = '🟩';
pub const WITHIN_GLYPH: char = '🟨';
pub const ABSENT_GLYPH: char = '⬛';

/// Marker appended to the share header for hard mode wins
pub const HARD_MODE_MARKER: char = '*';

#[must_use]
pub const fn letter_glyph(result: LetterResult) -> char {
    if result.correct {
        CORRECT_GLYPH
    } else if result.within {
        WITHIN_GLYPH
    } else {
        ABSENT_GLYPH
    }
}

/// Format an attempt as a row of emoji squares
#[must_use]
pub fn attempt_to_emoji(attempt: &Attempt) -> String {
    attempt.iter().map(|&result| letter_glyph(result)).collect()
}

/// Spoiler-free summary for sharing
///
/// ```text
/// Wordle 1 3/6*
///
/// ⬛🟨⬛⬛⬛
/// 🟩⬛🟩🟨⬛
/// 🟩🟩🟩🟩🟩
/// ```
///
/// The score is `X` for a lost game and the day index is shown 1-based.
#[must_use]
pub fn share_text(label: &str, session: &GameSession) -> String {
    let score = if session.status() == GameStatus::Lost {
        "X".to_string()
    } else {
        session.attempts().len().to_string()
    };

    let mut text = format!(
        "{label} {} {score}/{}",
        session.day_index() + 1,
        session.max_attempts()
    );
    if session.won_in_hard_mode() {
        text.push(HARD_MODE_MARKER);
    }
    text.push('\n');

    for attempt in session.attempts() {
        text.push('\n');
        text.push_str(&attempt_to_emoji(attempt));
    }

    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
