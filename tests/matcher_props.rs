use proptest::prelude::*;
use wordle_daily::core::{check_against_previous, evaluate};

// Small alphabet so duplicate letters are common
fn word() -> impl Strategy<Value = String> {
    "[a-e]{5}"
}

fn count(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Evaluating the same pair twice gives the same feedback
    #[test]
    fn evaluation_is_idempotent(guess in word(), secret in word()) {
        let first = evaluate(&guess, &secret, None).unwrap();
        let second = evaluate(&guess, &secret, None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A letter is never marked more often than the secret holds it
    #[test]
    fn marks_respect_occurrence_counts(guess in word(), secret in word()) {
        let attempt = evaluate(&guess, &secret, None).unwrap();

        for letter in guess.chars() {
            let marked = attempt
                .iter()
                .filter(|result| result.letter == letter && (result.correct || result.within))
                .count();
            prop_assert_eq!(marked, count(&guess, letter).min(count(&secret, letter)));
        }
    }

    /// Correct means same letter at the same position, and excludes within
    #[test]
    fn correct_is_positional(guess in word(), secret in word()) {
        let attempt = evaluate(&guess, &secret, None).unwrap();

        for ((result, g), s) in attempt.iter().zip(guess.chars()).zip(secret.chars()) {
            prop_assert_eq!(result.letter, g);
            prop_assert_eq!(result.correct, g == s);
            prop_assert!(!(result.correct && result.within));
        }
    }

    #[test]
    fn secret_always_wins(secret in word()) {
        prop_assert!(evaluate(&secret, &secret, None).unwrap().is_win());
    }

    /// The secret itself never breaks hard mode
    #[test]
    fn secret_satisfies_any_hints(guess in word(), secret in word()) {
        let previous = evaluate(&guess, &secret, None).unwrap();
        let current = evaluate(&secret, &secret, None).unwrap();
        prop_assert!(check_against_previous(&current, &previous).is_ok());
    }
}
