//! Game session state machine
//!
//! A session starts `InProgress` and ends either `Won` (all letters correct)
//! or `Lost` (no lives left). Each accepted guess is saved through the
//! session's [`StorageBackend`]; rejected guesses leave no trace.

use super::Statistics;
use crate::config::GameConfig;
use crate::core::{
    Attempt, HardModeViolation, KeyboardState, MatchError, check_against_previous, evaluate,
};
use crate::storage::{Snapshot, Storage, StorageBackend};
use crate::wordlists::WordList;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was not accepted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("{0}")]
    PrevStateNotMatching(HardModeViolation),
    #[error("No guesses left")]
    UserRanOutOfLives,
    #[error("The game is over")]
    GameIsOver,
}

/// One player's game for one puzzle
#[derive(Debug)]
pub struct GameSession<'w> {
    secret: String,
    day_index: u32,
    words: Option<&'w WordList>,
    storage: StorageBackend,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    lives_remaining: usize,
    ended: bool,
    won_in_hard_mode: bool,
}

impl<'w> GameSession<'w> {
    /// Fresh session with in-memory storage and no word list check
    pub fn new(secret: impl Into<String>, day_index: u32, config: &GameConfig) -> Self {
        Self {
            secret: secret.into(),
            day_index,
            words: None,
            storage: StorageBackend::default(),
            max_attempts: config.max_attempts,
            attempts: Vec::new(),
            lives_remaining: config.max_attempts,
            ended: false,
            won_in_hard_mode: false,
        }
    }

    /// Reject guesses that are not in `words`
    #[must_use]
    pub fn with_word_list(mut self, words: &'w WordList) -> Self {
        self.words = Some(words);
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    /// Resume from storage if it holds today's game, otherwise start clean
    ///
    /// A stale or unreadable save is cleared. Returns whether a saved game
    /// was restored.
    pub fn restore_saved(&mut self) -> bool {
        if self.storage.check_validity(self.day_index)
            && let Ok(Some(snapshot)) = self.storage.load()
        {
            log::info!(
                "Resuming puzzle #{} with {} attempts",
                self.day_index + 1,
                snapshot.attempts.len()
            );
            self.apply(snapshot);
            return true;
        }

        log::debug!("No saved game for puzzle #{}", self.day_index + 1);
        if let Err(err) = self.storage.clear() {
            log::error!("Could not clear stale save: {err}");
        }
        false
    }

    /// Replace the game progress with `snapshot`
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.attempts = snapshot.attempts;
        self.lives_remaining = snapshot.lives_remaining;
        self.ended = snapshot.ended;
        self.day_index = snapshot.day_index;
        self.won_in_hard_mode = snapshot.won_in_hard_mode;
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            attempts: self.attempts.clone(),
            lives_remaining: self.lives_remaining,
            ended: self.ended,
            day_index: self.day_index,
            won_in_hard_mode: self.won_in_hard_mode,
        }
    }

    /// Evaluate and record a guess
    ///
    /// Input is trimmed and lowercased first. In hard mode the guess must
    /// also respect the hints from the previous attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::UserRanOutOfLives`] / [`GameError::GameIsOver`] once the game has ended
    /// - [`GameError::Match`] if the guess cannot be evaluated
    /// - [`GameError::PrevStateNotMatching`] on a hard mode violation
    ///
    /// The session is unchanged on error.
    pub fn submit_guess(&mut self, input: &str, hard_mode: bool) -> Result<&Attempt, GameError> {
        if self.lives_remaining == 0 {
            return Err(GameError::UserRanOutOfLives);
        }
        if self.ended {
            return Err(GameError::GameIsOver);
        }

        let guess = input.trim().to_lowercase();
        let attempt = evaluate(&guess, &self.secret, self.words).inspect_err(|err| {
            log::debug!("Rejected guess {guess:?}: {err}");
        })?;

        if hard_mode && let Some(previous) = self.attempts.last() {
            check_against_previous(&attempt, previous).map_err(|violation| {
                log::debug!("Rejected guess {guess:?} in hard mode: {violation}");
                GameError::PrevStateNotMatching(violation)
            })?;
        }

        let won = attempt.is_win();
        let index = self.attempts.len();
        self.attempts.push(attempt);

        if won {
            self.ended = true;
            self.won_in_hard_mode = hard_mode;
            log::info!("Puzzle solved in {} attempts", self.attempts.len());
        } else {
            self.lives_remaining -= 1;
            if self.lives_remaining == 0 {
                self.ended = true;
                log::info!("Out of guesses, the word was {}", self.secret);
            }
        }

        self.persist();
        Ok(&self.attempts[index])
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(err) = self.storage.save(&snapshot) {
            log::error!("Could not save game: {err}");
        }
        if self.ended {
            self.record_statistics();
        }
    }

    fn record_statistics(&mut self) {
        let mut statistics = match self.storage.load_statistics() {
            Ok(statistics) => statistics,
            Err(err) => {
                log::error!("Could not load statistics, starting fresh: {err}");
                Statistics::new(self.max_attempts)
            }
        };

        if statistics.record_outcome(self.day_index, self.status(), self.attempts.len())
            && let Err(err) = self.storage.save_statistics(&statistics)
        {
            log::error!("Could not save statistics: {err}");
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.ended {
            GameStatus::InProgress
        } else if self.attempts.last().is_some_and(Attempt::is_win) {
            GameStatus::Won
        } else {
            GameStatus::Lost
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub const fn day_index(&self) -> u32 {
        self.day_index
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives_remaining
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    /// Hard mode state at the moment of winning; unaffected by later toggles
    #[must_use]
    pub const fn won_in_hard_mode(&self) -> bool {
        self.won_in_hard_mode
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_attempts(&self.attempts)
    }

    #[must_use]
    pub const fn storage(&self) -> &StorageBackend {
        &self.storage
    }
}
