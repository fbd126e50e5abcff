//! Word lists for the daily puzzle
//!
//! Provides embedded word lists compiled into the binary and a file loader
//! for custom lists.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use list::WordList;
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WORD_LENGTH;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(
                word.len(),
                DEFAULT_WORD_LENGTH,
                "Word '{word}' is not {DEFAULT_WORD_LENGTH} letters"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 481, "Expected 481 answer words");
        assert_eq!(ALLOWED_COUNT, 672, "Expected 672 allowed words");
    }
}
