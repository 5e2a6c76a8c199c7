//! Diagnostics for the manpath library.
//!
//! Warnings about individual directories go through [`Logger`], which
//! honours quiet mode. Debug tracing uses the `log` macros; [`Logger`] also
//! implements [`log::Log`] so the command-line tool can route those lines to
//! stderr when running verbosely.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "MANPATH_LOG_MODE";

/// How much the engine reports while resolving paths.
///
/// # Examples
///
/// ```
/// use manpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// assert!("loud".parse::<LogLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No warnings; fatal errors are left to the caller.
    Quiet,
    /// Warnings about skipped or missing directories.
    Normal,
    /// Warnings plus the `log::debug!` trace of every lookup.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" | "debug" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl LogLevel {
    const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Writes diagnostics to stderr, prefixed with the program name.
///
/// # Examples
///
/// ```
/// use manpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("/usr/local/man isn't a directory");
/// assert!(!logger.is_quiet());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger reporting at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether warnings are suppressed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.level == LogLevel::Quiet
    }

    /// Reports a recoverable problem such as a missing directory.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    fn emit(&self, level: log::Level, message: &str) {
        if level > self.level.filter() {
            return;
        }
        match level {
            log::Level::Error | log::Level::Warn => eprintln!("manpath: {message}"),
            log::Level::Info | log::Level::Debug | log::Level::Trace => eprintln!("{message}"),
        }
    }

    /// Installs this logger as the global `log` backend.
    ///
    /// Only the first installation in a process takes effect.
    pub fn install(self) {
        let filter = self.level.filter();
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(filter);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        self.emit(record.level(), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Chooses a logger from the command-line flags and `MANPATH_LOG_MODE`.
///
/// `verbose` wins over `quiet`; with neither flag the environment variable
/// decides, and an unset or unrecognised value means [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use manpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    #[test]
    fn test_level_names() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Verbose));
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_reports_warnings() {
        let logger = Logger::default();
        assert_eq!(logger.level(), LogLevel::Normal);
        assert!(!logger.is_quiet());
    }

    #[test]
    fn test_backend_filter() {
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let error = log::Metadata::builder().level(log::Level::Error).build();

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&warn));
        assert!(quiet.enabled(&error));

        assert!(Logger::default().enabled(&warn));
        assert!(!Logger::default().enabled(&debug));
        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
    }

    #[test]
    #[serial]
    fn test_log_mode_environment() {
        let saved = env::var(LOG_MODE_ENV).ok();

        env::set_var(LOG_MODE_ENV, "quiet");
        assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);

        env::set_var(LOG_MODE_ENV, "bogus");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        match saved {
            Some(value) => env::set_var(LOG_MODE_ENV, value),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }
}
