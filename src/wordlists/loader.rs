//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk or from the embedded constants.

use super::{ALLOWED, ANSWERS, WordList};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable word list
///
/// Treated as fatal at startup: the game cannot pick or validate words.
#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list fetch failed for {}: {source}", path.display())]
    FetchFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {} has no {word_length}-letter words", path.display())]
    Empty { path: PathBuf, word_length: usize },
}

/// Load words of `word_length` letters from a file
///
/// Lines are trimmed and lowercased; blank lines and lines of the wrong
/// length or with non-alphabetic characters are skipped.
///
/// # Errors
///
/// Returns [`WordListError::FetchFailed`] if the file cannot be read and
/// [`WordListError::Empty`] if no line survives filtering.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::FetchFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content, word_length);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
            word_length,
        });
    }

    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words, keeping only valid `word_length`-letter entries
#[must_use]
pub fn parse_word_list(content: &str, word_length: usize) -> WordList {
    let mut skipped = 0usize;
    let words: WordList = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = line.to_lowercase();
            if word.chars().count() == word_length && word.chars().all(char::is_alphabetic) {
                Some(word)
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid word list entries");
    }
    words
}

/// Embedded secret word pool
#[must_use]
pub fn embedded_answers() -> WordList {
    WordList::from_slice(ANSWERS)
}

/// Embedded guessable words, including every answer
#[must_use]
pub fn embedded_allowed() -> WordList {
    let mut words = WordList::from_slice(ALLOWED);
    words.extend(ANSWERS.iter().copied());
    words
}
