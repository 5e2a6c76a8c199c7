//! Error types for the manpath library.
//!
//! Only structural failures are errors here: an unreadable or malformed
//! configuration file, an indeterminate working directory, or a directory
//! list that outgrows its capacity. Problems with individual directories are
//! reported as warnings and never surface as an `Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a manpath error.
///
/// # Examples
///
/// ```
/// use manpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/share/man".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the manpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration file could not be opened or read.
    #[error("can't open the manpath configuration file {}: {source}", path.display())]
    ConfigUnreadable {
        /// The configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file line could not be understood.
    #[error(
        "can't make sense of the manpath configuration file {} (line {line}): {reason}",
        path.display()
    )]
    ConfigParse {
        /// The configuration file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The current working directory could not be determined.
    #[error("can't determine current directory: {0}")]
    CurrentDirUnavailable(#[source] std::io::Error),

    /// More directories were assembled than the list can hold.
    #[error("manpath list too long (limit is {limit} directories)")]
    TooManyDirectories {
        /// The configured capacity.
        limit: usize,
    },

    /// No `MANDB_MAP` directories are configured.
    #[error("no global manpaths set in config file {}", path.display())]
    NoGlobalManpaths {
        /// The system configuration file that was consulted.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error came from reading or parsing a configuration file.
    ///
    /// [`Error::NoGlobalManpaths`] is not one: the file was read, it just
    /// maps nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use manpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigParse {
    ///     path: PathBuf::from("/etc/manpath.config"),
    ///     line: 3,
    ///     reason: "unknown directive".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigUnreadable { .. } | Self::ConfigParse { .. }
        )
    }
}
