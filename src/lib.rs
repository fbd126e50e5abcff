//! Daily Word Puzzle
//!
//! A daily five-letter word-guessing game with duplicate-aware feedback,
//! hard mode, saved progress and shareable results.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::config::GameConfig;
//! use wordle_daily::game::{GameSession, GameStatus};
//!
//! let mut session = GameSession::new("crane", 0, &GameConfig::default());
//! let attempt = session.submit_guess("slate", false).unwrap();
//! assert!(attempt.letters()[2].correct);
//!
//! session.submit_guess("crane", false).unwrap();
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session orchestration, daily selection and statistics
pub mod game;

// Saved game state
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod logging;
