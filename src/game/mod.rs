//! Game orchestration
//!
//! Session bookkeeping, daily puzzle selection and player statistics built
//! on top of the pure functions in [`crate::core`].

pub mod daily;
mod session;
mod stats;

pub use daily::{DailyError, DailyPuzzle};
pub use session::{GameError, GameSession, GameStatus};
pub use stats::Statistics;
