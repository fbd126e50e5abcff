//! Daily Word Puzzle - CLI
//!
//! Play today's puzzle in a TUI or line mode, check single guesses, and
//! review saved results.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use wordle_daily::{
    commands::{check_guess, run_simple},
    config::{DEFAULT_SAVE_FILE, GameConfig, PRACTICE_LABEL},
    game::{DailyPuzzle, GameSession},
    logging::init_logging,
    output::{print_board, print_check_result, print_game_over, print_statistics, share_text},
    storage::{Storage, StorageBackend},
    wordlists::{WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "A daily five-letter word puzzle with hard mode and shareable results",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with hard mode enabled
    #[arg(long, global = true)]
    hard: bool,

    /// Play the puzzle of another day (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Where progress and statistics are saved
    #[arg(long, global = true, env = "WORDLE_SAVE", default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Keep progress in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Extra allowed guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Random secret, nothing saved
    #[arg(short, long, global = true)]
    practice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Evaluate a guess against a known word
    Check {
        /// The guess to evaluate
        guess: String,

        /// The word to evaluate against
        word: String,

        /// Previous guess to check hard mode rules against
        #[arg(short, long)]
        after: Option<String>,
    },

    /// Print the share text of the saved game
    Share,

    /// Show statistics
    Stats,

    /// Forget the saved game for today
    Reset,
}

/// Load word lists
///
/// Returns (`allowed`, `answers`). A custom list is merged with the answers
/// so every secret stays guessable.
fn load_wordlists(custom: Option<&PathBuf>, word_length: usize) -> Result<(WordList, WordList)> {
    let answers = loader::embedded_answers();
    let allowed = match custom {
        Some(path) => {
            let mut words = loader::load_from_file(path, word_length)?;
            words.extend(answers.iter().map(str::to_string));
            words
        }
        None => loader::embedded_allowed(),
    };
    Ok((allowed, answers))
}

fn storage_backend(cli: &Cli) -> StorageBackend {
    if cli.no_save || cli.practice {
        StorageBackend::memory()
    } else {
        StorageBackend::file(&cli.save_file)
    }
}

fn build_session<'w>(
    cli: &Cli,
    config: &GameConfig,
    allowed: &'w WordList,
    answers: &WordList,
) -> Result<GameSession<'w>> {
    let (secret, day_index) = if cli.practice {
        let secret = answers
            .words()
            .choose(&mut rand::rng())
            .context("Answer list is empty")?
            .clone();
        (secret, 0)
    } else {
        let puzzle = match cli.date {
            Some(date) => DailyPuzzle::for_date(date, config.epoch, answers)?,
            None => DailyPuzzle::today(config.epoch, answers)?,
        };
        (puzzle.secret, puzzle.day_index)
    };

    let mut session = GameSession::new(secret, day_index, config)
        .with_word_list(allowed)
        .with_storage(storage_backend(cli));
    session.restore_saved();
    Ok(session)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // Log output would corrupt the TUI
    init_logging(if matches!(command, Commands::Play) {
        LevelFilter::Off
    } else {
        LevelFilter::Warn
    });

    let mut config = GameConfig {
        hard_mode: cli.hard,
        ..GameConfig::default()
    };
    if cli.practice {
        config.label = PRACTICE_LABEL.to_string();
    }

    let (allowed, answers) = load_wordlists(cli.wordlist.as_ref(), config.word_length)?;

    match command {
        Commands::Check { guess, word, after } => {
            let result = check_guess(guess, word, after.as_deref(), Some(&allowed))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let statistics = storage_backend(&cli).load_statistics()?;
            print_statistics(&statistics);
            Ok(())
        }
        Commands::Reset => {
            storage_backend(&cli).clear()?;
            println!("Saved game cleared.");
            Ok(())
        }
        Commands::Share => {
            let session = build_session(&cli, &config, &allowed, &answers)?;
            if session.attempts().is_empty() {
                println!("No guesses yet for puzzle #{}.", session.day_index() + 1);
            } else if session.is_ended() {
                print_game_over(&session, &config.label);
            } else {
                print_board(&session);
                println!("{}", share_text(&config.label, &session));
            }
            Ok(())
        }
        Commands::Simple => {
            let mut session = build_session(&cli, &config, &allowed, &answers)?;
            run_simple(&mut session, &config.label, config.hard_mode)?;
            Ok(())
        }
        Commands::Play => run_play_command(&cli, &config, &allowed, &answers),
    }
}

fn run_play_command(
    cli: &Cli,
    config: &GameConfig,
    allowed: &WordList,
    answers: &WordList,
) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let session = build_session(cli, config, allowed, answers)?;
    let app = App::new(session, config.label.clone(), config.hard_mode);
    run_tui(app)
}
