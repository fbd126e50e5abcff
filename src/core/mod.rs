//! Core domain types for the puzzle
//!
//! Pure functions and data with no I/O: guess evaluation, hard mode checks
//! and keyboard hint aggregation.

mod attempt;
mod hard_mode;
mod keyboard;
mod matcher;

pub use attempt::{Attempt, LetterResult};
pub use hard_mode::{HardModeViolation, check_against_previous, ordinal};
pub use keyboard::{KeyboardState, LetterState};
pub use matcher::{MatchError, evaluate};
