//! Guess evaluation against the secret word
//!
//! Produces per-letter feedback using Wordle's duplicate-letter rules:
//! exact matches claim their letter first, then the remaining copies are
//! handed out left to right as "within" hints.

use super::{Attempt, LetterResult};
use crate::wordlists::WordList;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Reasons a guess cannot be evaluated
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("No guess was entered")]
    UserInputNotProvided,
    #[error("No secret word is loaded")]
    WordNotProvided,
    #[error("{}", length_message(*expected, *actual))]
    WordsDifferentLength { expected: usize, actual: usize },
    #[error("Not in word list")]
    NotInWordList,
}

fn length_message(expected: usize, actual: usize) -> &'static str {
    if actual < expected {
        "Not enough letters"
    } else {
        "Too many letters"
    }
}

/// Evaluate `guess` against `secret`
///
/// Inputs are compared as-is; callers normalize case beforehand. When a word
/// list is supplied the guess must be a member of it.
///
/// # Errors
/// Checked in order, stopping at the first failure:
/// 1. empty guess: [`MatchError::UserInputNotProvided`]
/// 2. empty secret: [`MatchError::WordNotProvided`]
/// 3. length mismatch: [`MatchError::WordsDifferentLength`]
/// 4. guess missing from `words`: [`MatchError::NotInWordList`]
///
/// # Examples
/// ```
/// use wordle_daily::core::evaluate;
///
/// let attempt = evaluate("robot", "floor", None).unwrap();
/// // R(within) O(within) B(absent) O(correct) T(absent)
/// assert!(attempt.letters()[0].within);
/// assert!(attempt.letters()[1].within);
/// assert!(attempt.letters()[2].is_absent());
/// assert!(attempt.letters()[3].correct);
/// assert!(attempt.letters()[4].is_absent());
/// ```
pub fn evaluate(guess: &str, secret: &str, words: Option<&WordList>) -> Result<Attempt, MatchError> {
    if guess.is_empty() {
        return Err(MatchError::UserInputNotProvided);
    }
    if secret.is_empty() {
        return Err(MatchError::WordNotProvided);
    }

    let guess_letters: Vec<char> = guess.chars().collect();
    let secret_letters: Vec<char> = secret.chars().collect();

    if guess_letters.len() != secret_letters.len() {
        return Err(MatchError::WordsDifferentLength {
            expected: secret_letters.len(),
            actual: guess_letters.len(),
        });
    }

    if let Some(words) = words
        && !words.contains(guess)
    {
        return Err(MatchError::NotInWordList);
    }

    let mut remaining = letter_counts(&secret_letters);
    let mut results: Vec<LetterResult> = guess_letters
        .iter()
        .map(|&letter| LetterResult::absent(letter))
        .collect();

    // First pass: exact matches claim their letter
    for (result, &expected) in results.iter_mut().zip(&secret_letters) {
        if result.letter == expected {
            result.correct = true;
            if let Some(count) = remaining.get_mut(&expected) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: leftover copies become "within", leftmost first
    for result in results.iter_mut().filter(|result| !result.correct) {
        if let Some(count) = remaining.get_mut(&result.letter)
            && *count > 0
        {
            result.within = true;
            *count -= 1;
        }
    }

    Ok(Attempt::new(results))
}

fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(attempt: &Attempt) -> Vec<(bool, bool)> {
        attempt.iter().map(|r| (r.correct, r.within)).collect()
    }

    #[test]
    fn exact_match_is_all_correct() {
        let attempt = evaluate("exact", "exact", None).unwrap();
        assert_eq!(flags(&attempt), vec![(true, false); 5]);
        assert!(attempt.is_win());
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        let attempt = evaluate("wrong", "types", None).unwrap();
        assert_eq!(flags(&attempt), vec![(false, false); 5]);
    }

    #[test]
    fn duplicate_guess_letter_with_one_exact_match() {
        // ROBOT vs LOOKS: the O at 1 is exact, the O at 3 takes the second O
        let attempt = evaluate("robot", "looks", None).unwrap();
        assert_eq!(
            flags(&attempt),
            vec![
                (false, false),
                (true, false),
                (false, false),
                (false, true),
                (false, false),
            ]
        );
    }

    #[test]
    fn exact_match_wins_over_earlier_within() {
        // ROBOT vs FLOOR: the second O is exact, so the first O only gets
        // the remaining copy
        let attempt = evaluate("robot", "floor", None).unwrap();
        assert_eq!(
            flags(&attempt),
            vec![
                (false, true),
                (false, true),
                (false, false),
                (true, false),
                (false, false),
            ]
        );
    }

    #[test]
    fn surplus_copies_are_absent() {
        // SPEED vs ABIDE: one E in the answer, so only the first E is within
        let attempt = evaluate("speed", "abide", None).unwrap();
        assert_eq!(
            flags(&attempt),
            vec![
                (false, false),
                (false, false),
                (false, true),
                (false, false),
                (false, true),
            ]
        );
    }

    #[test]
    fn leftmost_copy_gets_within() {
        let attempt = evaluate("eerie", "theme", None).unwrap();
        // THEME has two Es; the last E is exact, leaving one for the leftmost
        assert_eq!(
            flags(&attempt),
            vec![
                (false, true),
                (false, false),
                (false, false),
                (false, false),
                (true, false),
            ]
        );
    }

    #[test]
    fn missing_guess_is_reported_first() {
        assert_eq!(evaluate("", "", None), Err(MatchError::UserInputNotProvided));
        assert_eq!(evaluate("", "crane", None), Err(MatchError::UserInputNotProvided));
    }

    #[test]
    fn missing_secret() {
        assert_eq!(evaluate("crane", "", None), Err(MatchError::WordNotProvided));
    }

    #[test]
    fn length_mismatch_in_both_directions() {
        let short = evaluate("cran", "crane", None).unwrap_err();
        assert_eq!(
            short,
            MatchError::WordsDifferentLength {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(short.to_string(), "Not enough letters");

        let long = evaluate("cranes", "crane", None).unwrap_err();
        assert_eq!(long.to_string(), "Too many letters");
    }

    #[test]
    fn length_is_checked_before_word_list() {
        let words = WordList::from_slice(&["crane"]);
        assert!(matches!(
            evaluate("xx", "crane", Some(&words)),
            Err(MatchError::WordsDifferentLength { .. })
        ));
    }

    #[test]
    fn word_list_membership() {
        let words = WordList::from_slice(&["crane", "slate"]);
        assert_eq!(
            evaluate("zzzzz", "crane", Some(&words)),
            Err(MatchError::NotInWordList)
        );
        assert!(evaluate("slate", "crane", Some(&words)).is_ok());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let first = evaluate("speed", "erase", None).unwrap();
        let second = evaluate("speed", "erase", None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn letters_are_preserved() {
        let attempt = evaluate("crane", "slate", None).unwrap();
        assert_eq!(attempt.word(), "crane");
    }
}
