//! Evaluated guesses
//!
//! A [`LetterResult`] is the feedback for one guessed letter, and an [`Attempt`]
//! is the ordered feedback for a whole guess.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single guessed letter
///
/// `correct` and `within` are never both set by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterResult {
    pub letter: char,
    pub correct: bool,
    pub within: bool,
}

impl LetterResult {
    /// Letter in the right position
    #[must_use]
    pub const fn correct(letter: char) -> Self {
        Self {
            letter,
            correct: true,
            within: false,
        }
    }

    /// Letter present elsewhere in the word
    #[must_use]
    pub const fn within(letter: char) -> Self {
        Self {
            letter,
            correct: false,
            within: true,
        }
    }

    /// Letter not (or no longer) available in the word
    #[must_use]
    pub const fn absent(letter: char) -> Self {
        Self {
            letter,
            correct: false,
            within: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        !self.correct && !self.within
    }
}

/// One completed, evaluated guess
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attempt(Vec<LetterResult>);

impl Attempt {
    #[must_use]
    pub const fn new(letters: Vec<LetterResult>) -> Self {
        Self(letters)
    }

    /// Per-position feedback, left to right
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&LetterResult> {
        self.0.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterResult> {
        self.0.iter()
    }

    /// True when every letter is in its correct position
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|result| result.correct)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|result| result.letter).collect()
    }
}

impl From<Vec<LetterResult>> for Attempt {
    fn from(letters: Vec<LetterResult>) -> Self {
        Self(letters)
    }
}

impl<'a> IntoIterator for &'a Attempt {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_are_mutually_exclusive() {
        let correct = LetterResult::correct('a');
        let within = LetterResult::within('a');
        let absent = LetterResult::absent('a');

        assert!(correct.correct && !correct.within);
        assert!(!within.correct && within.within);
        assert!(absent.is_absent());
        assert!(!correct.is_absent());
    }

    #[test]
    fn attempt_word_and_win() {
        let attempt = Attempt::new("crane".chars().map(LetterResult::correct).collect());
        assert_eq!(attempt.word(), "crane");
        assert_eq!(attempt.len(), 5);
        assert!(attempt.is_win());
        assert_eq!(format!("{attempt}"), "crane");
    }

    #[test]
    fn attempt_with_any_miss_is_not_a_win() {
        let attempt = Attempt::new(vec![
            LetterResult::correct('c'),
            LetterResult::within('r'),
            LetterResult::absent('x'),
        ]);
        assert!(!attempt.is_win());
    }

    #[test]
    fn empty_attempt_is_not_a_win() {
        assert!(!Attempt::default().is_win());
        assert!(Attempt::default().is_empty());
    }

    #[test]
    fn serializes_as_plain_list() {
        let attempt = Attempt::new(vec![LetterResult::within('o')]);
        let json = serde_json::to_string(&attempt).unwrap();
        assert_eq!(json, r#"[{"letter":"o","correct":false,"within":true}]"#);
    }
}
