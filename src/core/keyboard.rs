//! Keyboard hint aggregation
//!
//! Folds every attempt into the best state seen for each letter so the
//! on-screen keyboard can be colored.

use super::{Attempt, LetterResult};
use rustc_hash::FxHashMap;

/// Best known state for a letter, ordered by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Within,
    Correct,
}

impl From<LetterResult> for LetterState {
    fn from(result: LetterResult) -> Self {
        if result.correct {
            Self::Correct
        } else if result.within {
            Self::Within
        } else {
            Self::Absent
        }
    }
}

/// Per-letter hint state across a whole game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut keyboard = Self::default();
        for attempt in attempts {
            keyboard.record(attempt);
        }
        keyboard
    }

    /// Merge one attempt; a letter never drops to a lower state
    pub fn record(&mut self, attempt: &Attempt) {
        for &result in attempt {
            let state = LetterState::from(result);
            self.letters
                .entry(result.letter)
                .and_modify(|known| *known = (*known).max(state))
                .or_insert(state);
        }
    }

    /// State for `letter`, or `None` if it has not been guessed yet
    #[must_use]
    pub fn state(&self, letter: char) -> Option<LetterState> {
        self.letters.get(&letter).copied()
    }
}
