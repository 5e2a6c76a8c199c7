//! Filesystem probes: directory classification, wildcard expansion and
//! symlink canonicalization.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Result of checking whether a path is a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The path exists and is a directory (symlinks followed).
    Directory,
    /// The path exists but is not a directory.
    NotDirectory,
    /// The path could not be examined (missing, permission denied, ...).
    Unreadable(ErrorKind),
}

impl DirStatus {
    /// Classifies a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use manpath::path::DirStatus;
    ///
    /// assert_eq!(DirStatus::probe("/"), DirStatus::Directory);
    /// assert!(matches!(
    ///     DirStatus::probe("/nonexistent/man"),
    ///     DirStatus::Unreadable(_)
    /// ));
    /// ```
    pub fn probe(path: impl AsRef<Path>) -> Self {
        match fs::metadata(path.as_ref()) {
            Ok(meta) if meta.is_dir() => Self::Directory,
            Ok(_) => Self::NotDirectory,
            Err(e) => Self::Unreadable(e.kind()),
        }
    }

    /// Whether the probe found a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Expands a directory pattern into candidate directories.
///
/// Implementations must return at least one entry for every pattern: when
/// nothing matches, the pattern itself.
pub trait PathExpander {
    /// Expands `pattern`, preserving the order of matches.
    fn expand(&self, pattern: &str) -> Vec<String>;
}

/// Shell-style wildcard expansion backed by the `glob` crate.
///
/// Matches are returned in the crate's (alphabetical) order. Patterns that
/// match nothing, or are not valid patterns, expand to themselves.
///
/// # Examples
///
/// ```
/// use manpath::path::{GlobExpander, PathExpander};
///
/// let expanded = GlobExpander.expand("/nonexistent/*/man");
/// assert_eq!(expanded, vec!["/nonexistent/*/man".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobExpander;

impl PathExpander for GlobExpander {
    fn expand(&self, pattern: &str) -> Vec<String> {
        let matches: Vec<String> = match glob::glob(pattern) {
            Ok(paths) => paths
                .filter_map(std::result::Result::ok)
                .filter_map(|p| p.to_str().map(str::to_string))
                .collect(),
            Err(e) => {
                log::debug!("invalid pattern {pattern}: {e}");
                Vec::new()
            }
        };

        if matches.is_empty() {
            vec![pattern.to_string()]
        } else {
            matches
        }
    }
}

/// Resolves every symlink in `path`.
///
/// Returns `None` when the path cannot be resolved (missing, broken
/// symlink, not valid Unicode).
#[must_use]
pub fn canonical_form(path: &str) -> Option<String> {
    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.to_str().map(str::to_string))
}
