//! One-shot guess evaluation
//!
//! Evaluates a guess against a known word, optionally checking it against a
//! previous guess under hard mode rules.

use crate::core::{Attempt, HardModeViolation, MatchError, check_against_previous, evaluate};
use crate::wordlists::WordList;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: String,
    pub word: String,
    pub attempt: Attempt,
    /// Feedback for the previous guess, when one was given
    pub previous: Option<Attempt>,
    pub violation: Option<HardModeViolation>,
}

/// Evaluate `guess` against `word`
///
/// Inputs are trimmed and lowercased. When `previous` is given it is
/// evaluated against the same word and `guess` is checked against its hints.
///
/// # Errors
///
/// Returns a [`MatchError`] if either guess cannot be evaluated.
pub fn check_guess(
    guess: &str,
    word: &str,
    previous: Option<&str>,
    words: Option<&WordList>,
) -> Result<CheckResult, MatchError> {
    let guess = guess.trim().to_lowercase();
    let word = word.trim().to_lowercase();

    let attempt = evaluate(&guess, &word, words)?;
    let previous = previous
        .map(|prev| evaluate(&prev.trim().to_lowercase(), &word, words))
        .transpose()?;
    let violation = previous
        .as_ref()
        .and_then(|prev| check_against_previous(&attempt, prev).err());

    Ok(CheckResult {
        guess,
        word,
        attempt,
        previous,
        violation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_allowed;

    #[test]
    fn check_plain_guess() {
        let result = check_guess("CRANE", "slate", None, None).unwrap();
        assert_eq!(result.guess, "crane");
        assert_eq!(result.word, "slate");
        assert!(result.previous.is_none());
        assert!(result.violation.is_none());
        assert!(result.attempt.letters()[2].correct);
    }

    #[test]
    fn check_reports_hard_mode_violation() {
        let result = check_guess("trust", "looks", Some("robot"), None).unwrap();
        assert!(result.previous.is_some());
        assert_eq!(
            result.violation,
            Some(HardModeViolation::LetterAtPosition {
                letter: 'o',
                position: 1
            })
        );
    }

    #[test]
    fn check_accepts_compliant_guess() {
        let result = check_guess("boost", "looks", Some("robot"), None).unwrap();
        assert!(result.violation.is_none());
    }

    #[test]
    fn check_validates_against_word_list() {
        let words = embedded_allowed();
        assert!(matches!(
            check_guess("qzxjk", "crane", None, Some(&words)),
            Err(MatchError::NotInWordList)
        ));
        assert!(matches!(
            check_guess("crane", "slate", Some("qzxjk"), Some(&words)),
            Err(MatchError::NotInWordList)
        ));
    }
}
