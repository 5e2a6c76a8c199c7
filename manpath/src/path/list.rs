//! Capacity-bounded, ordered directory lists.

use std::env;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::path::probe::{canonical_form, DirStatus, PathExpander};

/// Maximum number of directories in a search path.
pub const DEFAULT_MAX_DIRS: usize = 128;

/// An ordered list of manual page directories.
///
/// The list refuses to grow past its capacity limit: pushing one directory
/// too many fails with [`Error::TooManyDirectories`] instead of truncating.
///
/// # Examples
///
/// ```
/// use manpath::path::{GlobExpander, PathList};
/// use manpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Quiet);
/// let list = PathList::build("/:/nonexistent/man:/", &GlobExpander, &logger, 16).unwrap();
/// assert_eq!(list.as_slice(), ["/".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathList {
    dirs: Vec<String>,
    #[serde(skip)]
    capacity: usize,
}

impl Default for PathList {
    fn default() -> Self {
        Self::with_capacity_limit(DEFAULT_MAX_DIRS)
    }
}

impl PathList {
    /// Creates an empty list that holds at most `capacity` directories.
    #[must_use]
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            dirs: Vec::new(),
            capacity,
        }
    }

    /// Builds the final search list from a colon-separated path.
    ///
    /// Each element is wildcard-expanded; candidates that are directories
    /// are kept in order, relative ones made absolute against the current
    /// directory. Entries that resolve (through symlinks) to a directory
    /// already in the list are then dropped, keeping the first occurrence
    /// in its original position; survivors are stored in resolved form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyDirectories`] if more than `capacity`
    /// directories qualify, and [`Error::CurrentDirUnavailable`] if a
    /// relative entry is present and the current directory is unknown.
    pub fn build(
        paths: &str,
        expander: &dyn PathExpander,
        logger: &Logger,
        capacity: usize,
    ) -> Result<Self> {
        let mut list = Self::with_capacity_limit(capacity);

        for element in paths.split(':').filter(|e| !e.is_empty()) {
            for dir in expander.expand(element) {
                match DirStatus::probe(&dir) {
                    DirStatus::Directory => {
                        let absolute = if dir.starts_with('/') {
                            dir
                        } else {
                            let cwd = env::current_dir().map_err(Error::CurrentDirUnavailable)?;
                            cwd.join(&dir).to_string_lossy().into_owned()
                        };
                        log::debug!("adding {absolute} to manpathlist");
                        list.push(absolute)?;
                    }
                    DirStatus::NotDirectory => {
                        logger.warn(&format!("{dir} isn't a directory"));
                    }
                    DirStatus::Unreadable(kind) => log::debug!("warning: {dir}: {kind}"),
                }
            }
        }

        list.dedup_symlinks();
        log::debug!("final search path = {}", list.join());
        Ok(list)
    }

    /// Adds the expansions of `dir` that are directories and not yet listed.
    ///
    /// Duplicates are detected verbatim, without resolving symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyDirectories`] when the list is full.
    pub fn push_unique(&mut self, dir: &str, expander: &dyn PathExpander, logger: &Logger) -> Result<()> {
        for candidate in expander.expand(dir) {
            if self.contains(&candidate) {
                log::debug!("{candidate} is already in the manpath");
                continue;
            }
            match DirStatus::probe(&candidate) {
                DirStatus::Directory => {
                    log::debug!("adding {candidate} to manpath");
                    self.push(candidate)?;
                }
                DirStatus::NotDirectory => {
                    logger.warn(&format!("{candidate} isn't a directory"));
                }
                DirStatus::Unreadable(kind) => log::debug!("warning: {candidate}: {kind}"),
            }
        }
        Ok(())
    }

    /// Appends a directory without any checks other than capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyDirectories`] when the list is full.
    pub fn push(&mut self, dir: String) -> Result<()> {
        if self.dirs.len() >= self.capacity {
            return Err(Error::TooManyDirectories {
                limit: self.capacity,
            });
        }
        self.dirs.push(dir);
        Ok(())
    }

    /// Drops entries whose resolved form matches an earlier entry.
    ///
    /// An entry that cannot be resolved is compared (and kept) as written.
    fn dedup_symlinks(&mut self) {
        let mut survivors: Vec<String> = Vec::with_capacity(self.dirs.len());
        for (index, entry) in self.dirs.drain(..).enumerate() {
            let resolved = canonical_form(&entry).unwrap_or_else(|| entry.clone());
            if let Some(earlier) = survivors.iter().position(|s| *s == resolved) {
                log::debug!(
                    "Removing duplicate manpath entry {entry} ({index}) -> {} ({earlier})",
                    survivors[earlier]
                );
                continue;
            }
            survivors.push(resolved);
        }
        self.dirs = survivors;
    }

    /// Whether `dir` is listed verbatim.
    #[must_use]
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.iter().any(|d| d == dir)
    }

    /// Number of directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// The capacity limit.
    #[must_use]
    pub const fn capacity_limit(&self) -> usize {
        self.capacity
    }

    /// The directories, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.dirs
    }

    /// Iterates over the directories.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.dirs.iter()
    }

    /// The directories joined with `:`.
    #[must_use]
    pub fn join(&self) -> String {
        self.dirs.join(":")
    }

    /// Consumes the list, returning the directories.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.dirs
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
