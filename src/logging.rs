//! Minimal stderr logger for the `log` facade

use crate::config::LOG_ENV_VAR;
use log::{LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger with a level from `WORDLE_LOG`, or `default` if unset or invalid
///
/// Calling this more than once keeps the first logger.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(level_from(Some("debug"), LevelFilter::Off), LevelFilter::Debug);
        assert_eq!(level_from(Some("WARN"), LevelFilter::Off), LevelFilter::Warn);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(level_from(None, LevelFilter::Info), LevelFilter::Info);
        assert_eq!(level_from(Some("loud"), LevelFilter::Error), LevelFilter::Error);
    }
}
