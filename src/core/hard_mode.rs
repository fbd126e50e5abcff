//! Hard mode hint carry-over
//!
//! In hard mode every guess must reuse the hints revealed by the previous
//! guess: correct letters stay in place and "within" letters appear somewhere.

use super::Attempt;
use thiserror::Error;

/// A hint from the previous guess that the current guess ignores
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// `letter` must stay at `position` (0-based)
    #[error("{} letter must be {}", ordinal(*position), letter.to_uppercase())]
    LetterAtPosition { letter: char, position: usize },

    /// `letter` must appear somewhere; `another` is set when the guess
    /// already uses it to satisfy a different hint
    #[error(
        "Guess must contain {}{}",
        if *another { "another " } else { "" },
        letter.to_uppercase()
    )]
    MissingLetter { letter: char, another: bool },
}

impl HardModeViolation {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::LetterAtPosition { letter, .. } | Self::MissingLetter { letter, .. } => letter,
        }
    }

    /// Required position, for positional violations only
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::LetterAtPosition { position, .. } => Some(position),
            Self::MissingLetter { .. } => None,
        }
    }
}

/// Ordinal label for a 0-based position ("1st" through "5th")
///
/// Positions past the fifth fall back to the plain number.
#[must_use]
pub fn ordinal(position: usize) -> String {
    match position {
        0 => "1st".to_string(),
        1 => "2nd".to_string(),
        2 => "3rd".to_string(),
        3 => "4th".to_string(),
        4 => "5th".to_string(),
        other => other.to_string(),
    }
}

/// Check that `current` respects every hint revealed by `previous`
///
/// Positional hints are all checked before presence hints, so a guess that
/// breaks both kinds reports the positional one. Each guessed letter can
/// satisfy at most one hint.
///
/// # Errors
/// Returns the first [`HardModeViolation`] found, scanning left to right.
///
/// # Examples
/// ```
/// use wordle_daily::core::{HardModeViolation, check_against_previous, evaluate};
///
/// let previous = evaluate("robot", "looks", None).unwrap();
/// let current = evaluate("trust", "looks", None).unwrap();
///
/// let violation = check_against_previous(&current, &previous).unwrap_err();
/// assert_eq!(violation, HardModeViolation::LetterAtPosition { letter: 'o', position: 1 });
/// assert_eq!(violation.to_string(), "2nd letter must be O");
/// ```
pub fn check_against_previous(
    current: &Attempt,
    previous: &Attempt,
) -> Result<(), HardModeViolation> {
    let guess = current.letters();
    let mut consumed = vec![false; guess.len()];

    for (position, hint) in previous.iter().enumerate().filter(|(_, hint)| hint.correct) {
        match guess.get(position) {
            Some(result) if result.letter == hint.letter => consumed[position] = true,
            _ => {
                return Err(HardModeViolation::LetterAtPosition {
                    letter: hint.letter,
                    position,
                });
            }
        }
    }

    for hint in previous.iter().filter(|hint| hint.within && !hint.correct) {
        let unclaimed = guess
            .iter()
            .zip(&consumed)
            .position(|(result, &used)| !used && result.letter == hint.letter);

        match unclaimed {
            Some(index) => consumed[index] = true,
            None => {
                // Every copy in the guess is already claimed by another hint
                let another = guess.iter().any(|result| result.letter == hint.letter);
                return Err(HardModeViolation::MissingLetter {
                    letter: hint.letter,
                    another,
                });
            }
        }
    }

    Ok(())
}
