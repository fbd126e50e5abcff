//! Terminal output formatting
//!
//! Share text, emoji rows and colored printing of game state.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_statistics,
};
pub use formatters::{attempt_to_emoji, share_text};
