//! Player statistics across daily games

use super::GameStatus;
use crate::config::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of attempts used; index 0 is a first-try win
    pub guess_distribution: Vec<u32>,
    /// Day index of the most recently recorded game
    pub last_completed_day: Option<u32>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: vec![0; max_attempts],
            last_completed_day: None,
        }
    }

    /// Record a finished game
    ///
    /// Games still in progress and repeat recordings for the same day are
    /// ignored. Returns whether anything changed.
    pub fn record_outcome(&mut self, day_index: u32, status: GameStatus, attempts_used: usize) -> bool {
        if status == GameStatus::InProgress || self.last_completed_day == Some(day_index) {
            return false;
        }

        self.games_played += 1;
        match status {
            GameStatus::Won => {
                let consecutive = day_index
                    .checked_sub(1)
                    .is_some_and(|yesterday| self.last_completed_day == Some(yesterday));
                self.current_streak = if consecutive {
                    self.current_streak + 1
                } else {
                    1
                };
                self.max_streak = self.max_streak.max(self.current_streak);
                self.games_won += 1;

                if let Some(slot) = attempts_used.checked_sub(1) {
                    if slot >= self.guess_distribution.len() {
                        self.guess_distribution.resize(slot + 1, 0);
                    }
                    self.guess_distribution[slot] += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
            GameStatus::InProgress => {}
        }

        self.last_completed_day = Some(day_index);
        true
    }

    /// Share of games won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
