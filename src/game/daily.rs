//! Daily puzzle selection
//!
//! The secret word is a pure function of the calendar date and the answer
//! list, so every player on the same day gets the same word without any
//! shared state.

use crate::wordlists::WordList;
use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyError {
    #[error("{date} is before the first puzzle on {epoch}")]
    BeforeEpoch { date: NaiveDate, epoch: NaiveDate },
    #[error("No answer words available")]
    NoWords,
}

/// Absolute day number of `date` (days since 0001-01-01, which is day 1)
#[must_use]
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Puzzle ordinal of `date`, 0 on the epoch itself
///
/// # Errors
/// Returns [`DailyError::BeforeEpoch`] for dates before `epoch`.
pub fn day_index(date: NaiveDate, epoch: NaiveDate) -> Result<u32, DailyError> {
    u32::try_from(day_number(date) - day_number(epoch))
        .map_err(|_| DailyError::BeforeEpoch { date, epoch })
}

/// Secret word for `date`: `answers[day_number mod len]`
///
/// # Errors
/// Returns [`DailyError::NoWords`] if `answers` is empty.
pub fn secret_for_date(date: NaiveDate, answers: &WordList) -> Result<&str, DailyError> {
    let len = i64::try_from(answers.len()).map_err(|_| DailyError::NoWords)?;
    if len == 0 {
        return Err(DailyError::NoWords);
    }
    let index = usize::try_from(day_number(date).rem_euclid(len)).map_err(|_| DailyError::NoWords)?;
    answers.get(index).ok_or(DailyError::NoWords)
}

/// The puzzle for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub day_index: u32,
    pub secret: String,
}

impl DailyPuzzle {
    /// # Errors
    /// See [`day_index`] and [`secret_for_date`].
    pub fn for_date(
        date: NaiveDate,
        epoch: NaiveDate,
        answers: &WordList,
    ) -> Result<Self, DailyError> {
        let day_index = day_index(date, epoch)?;
        let secret = secret_for_date(date, answers)?.to_string();
        log::debug!("Puzzle #{} for {date}", day_index + 1);

        Ok(Self {
            date,
            day_index,
            secret,
        })
    }

    /// Puzzle for the local calendar date
    ///
    /// # Errors
    /// See [`DailyPuzzle::for_date`].
    pub fn today(epoch: NaiveDate, answers: &WordList) -> Result<Self, DailyError> {
        Self::for_date(Local::now().date_naive(), epoch, answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_epoch;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        let epoch = default_epoch();
        assert_eq!(day_index(epoch, epoch), Ok(0));
        assert_eq!(day_index(date(2021, 6, 20), epoch), Ok(1));
        assert_eq!(day_index(date(2022, 6, 19), epoch), Ok(365));
    }

    #[test]
    fn dates_before_epoch_are_rejected() {
        let epoch = default_epoch();
        let early = date(2021, 6, 18);
        assert_eq!(
            day_index(early, epoch),
            Err(DailyError::BeforeEpoch { date: early, epoch })
        );
    }

    #[test]
    fn secret_is_indexed_by_day_number() {
        let answers = WordList::from_slice(&["crane", "slate", "irate"]);
        let today = date(2024, 1, 1);
        let expected = day_number(today).rem_euclid(3) as usize;

        assert_eq!(secret_for_date(today, &answers), Ok(answers.get(expected).unwrap()));
    }

    #[test]
    fn consecutive_days_cycle_through_the_list() {
        let answers = WordList::from_slice(&["crane", "slate", "irate"]);
        let first = date(2024, 1, 1);

        let picks: Vec<&str> = (0..6)
            .map(|offset| {
                secret_for_date(first + chrono::Days::new(offset), &answers).unwrap()
            })
            .collect();

        assert_eq!(picks[0], picks[3]);
        assert_eq!(picks[1], picks[4]);
        assert_ne!(picks[0], picks[1]);
    }

    #[test]
    fn selection_is_reproducible() {
        let answers = WordList::from_slice(&["crane", "slate", "irate", "cloud"]);
        let day = date(2025, 3, 14);
        let first = DailyPuzzle::for_date(day, default_epoch(), &answers).unwrap();
        let second = DailyPuzzle::for_date(day, default_epoch(), &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_answer_list() {
        let answers = WordList::default();
        assert_eq!(
            secret_for_date(date(2024, 1, 1), &answers),
            Err(DailyError::NoWords)
        );
    }
}
