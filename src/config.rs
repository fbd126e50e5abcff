//! Game configuration and defaults

use chrono::NaiveDate;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_LABEL: &str = "Wordle";
pub const PRACTICE_LABEL: &str = "Practice";
pub const DEFAULT_SAVE_FILE: &str = "wordle_daily.json";

/// Environment variable holding the log level filter
pub const LOG_ENV_VAR: &str = "WORDLE_LOG";

/// Date of puzzle #1 (day index 0)
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or(NaiveDate::MIN)
}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub word_length: usize,
    pub epoch: NaiveDate,
    /// Puzzle name shown in the share header
    pub label: String,
    /// Whether hard mode starts enabled
    pub hard_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
            epoch: default_epoch(),
            label: DEFAULT_LABEL.to_string(),
            hard_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.word_length, 5);
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2021, 6, 19).unwrap());
        assert_eq!(config.label, "Wordle");
        assert!(!config.hard_mode);
    }
}
