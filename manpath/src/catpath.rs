//! Mapping manual page directories to their formatted-page caches.
//!
//! Each `MANDB_MAP mandir catdir` record declares that pages formatted from
//! `mandir` are cached under `catdir`. Section directories are renamed on
//! the way (`man1` becomes `cat1`) and locale subdirectories are carried
//! across, so `/usr/share/man/de/man1/ls.1` caches to
//! `/var/cache/man/de/cat1/ls.1`.

use serde::Serialize;

use crate::config::store::{Category, ConfigStore};
use crate::logging::Logger;
use crate::path::append::SearchPath;

/// Prefix a directory must have to be translated to the legacy layout.
pub const FSSTND_MAN_ROOT: &str = "/usr";

/// Root of the legacy cache layout.
pub const FSSTND_CAT_ROOT: &str = "/var/catman";

/// Which `MANDB_MAP` records may supply a cache directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatScope {
    /// Only maps from the system configuration file.
    System,
    /// Only maps from the per-user configuration file.
    User,
    /// Both.
    #[default]
    All,
}

impl CatScope {
    /// Whether records of `category` are eligible under this scope.
    #[must_use]
    pub const fn includes(self, category: Category) -> bool {
        match category {
            Category::MandbMap => matches!(self, Self::System | Self::All),
            Category::MandbMapUser => matches!(self, Self::User | Self::All),
            _ => false,
        }
    }
}

/// Derives the cache path for a manual page directory or file.
///
/// The first eligible `MANDB_MAP` record, in configuration order, whose
/// mandir is a string prefix of `name` supplies the cache root. The part of
/// `name` after the mandir is split at its second-to-last `/` (as long as
/// that slash comes after the mandir): everything up to there is copied as
/// is, and a final part starting with `man` has that `man` replaced by
/// `cat`.
///
/// Returns `None` when no record matches.
///
/// # Examples
///
/// ```
/// use manpath::catpath::{catpath, CatScope};
/// use manpath::config::{Category, ConfigStore};
///
/// let mut store = ConfigStore::new();
/// store.add("/usr/share/man", "/var/cache/man", Category::MandbMap);
///
/// assert_eq!(
///     catpath(&store, "/usr/share/man/man1", CatScope::System).as_deref(),
///     Some("/var/cache/man/cat1")
/// );
/// assert_eq!(catpath(&store, "/usr/share/man/man1", CatScope::User), None);
/// assert_eq!(catpath(&store, "/opt/man/man1", CatScope::All), None);
/// ```
#[must_use]
pub fn catpath(store: &ConfigStore, name: &str, scope: CatScope) -> Option<String> {
    let record = store
        .records()
        .iter()
        .find(|r| scope.includes(r.category()) && name.starts_with(r.key()))?;

    let keylen = record.key().len();
    let mut result = record.content().to_string();

    let Some(last_slash) = name.rfind('/') else {
        result.push_str(&name[keylen..]);
        return Some(result);
    };

    let bytes = name.as_bytes();
    let mut suffix = last_slash;
    while suffix > keylen {
        suffix -= 1;
        if bytes[suffix] == b'/' {
            break;
        }
    }
    suffix = suffix.max(keylen);
    if bytes.get(suffix) == Some(&b'/') {
        suffix += 1;
    }

    result.push_str(&name[keylen..suffix]);
    let tail = &name[suffix..];
    match tail.strip_prefix("man") {
        Some(rest) => {
            result.push_str("cat");
            result.push_str(rest);
        }
        None => result.push_str(tail),
    }
    Some(result)
}

/// Translates a manual page directory to its legacy (FSSTND) cache directory.
///
/// `/usr` is replaced by `/var/catman`; `man<X>` segments become `cat<X>`
/// and a bare `man` segment is dropped. Directories outside `/usr` are
/// returned unchanged with a warning.
///
/// # Examples
///
/// ```
/// use manpath::catpath::fsstnd;
/// use manpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Quiet);
/// assert_eq!(fsstnd("/usr/man", &logger), "/var/catman");
/// assert_eq!(fsstnd("/usr/share/man", &logger), "/var/catman/share");
/// assert_eq!(fsstnd("/usr/X11R6/man/man1", &logger), "/var/catman/X11R6/cat1");
/// assert_eq!(fsstnd("/opt/man", &logger), "/opt/man");
/// ```
#[must_use]
pub fn fsstnd(man_dir: &str, logger: &Logger) -> String {
    let Some(rest) = man_dir.strip_prefix(FSSTND_MAN_ROOT) else {
        logger.warn(&format!("{man_dir} does not begin with {FSSTND_MAN_ROOT}"));
        return man_dir.to_string();
    };

    let mut result = FSSTND_CAT_ROOT.to_string();
    for segment in rest.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix("man") {
            Some("") => {}
            Some(section) => {
                result.push_str("/cat");
                result.push_str(section);
            }
            None => {
                result.push('/');
                result.push_str(segment);
            }
        }
    }
    result
}

/// Whether `dir` lies under a mandir mapped in the system configuration.
///
/// User maps never count: a directory only they mention is not global.
#[must_use]
pub fn is_global_mandir(store: &ConfigStore, dir: &str) -> bool {
    store
        .in_category(Category::MandbMap)
        .any(|r| dir.starts_with(r.key()))
}

/// Replaces every directory in `paths` with its mapped cache directory.
///
/// User maps take precedence over system maps; unmapped directories stand
/// for themselves.
///
/// # Examples
///
/// ```
/// use manpath::catpath::cat_manpath;
/// use manpath::config::{Category, ConfigStore};
///
/// let mut store = ConfigStore::new();
/// store.add("/usr/share/man", "/var/cache/man", Category::MandbMap);
/// store.add("/usr/share/man", "/home/u/.cache/man", Category::MandbMapUser);
///
/// assert_eq!(
///     cat_manpath(&store, "/usr/share/man:/opt/man"),
///     "/home/u/.cache/man:/opt/man"
/// );
/// ```
#[must_use]
pub fn cat_manpath(store: &ConfigStore, paths: &str) -> String {
    let mut result = SearchPath::new();
    for dir in paths.split(':').filter(|d| !d.is_empty()) {
        let cache = store
            .lookup_first(dir, Category::MandbMapUser)
            .or_else(|| store.lookup_first(dir, Category::MandbMap))
            .unwrap_or(dir);
        result.append(cache);
    }
    result.into()
}

/// Every mapped mandir, user and system, in configuration order.
///
/// Returns `None` if there are no `MANDB_MAP` records.
#[must_use]
pub fn mandb_manpath(store: &ConfigStore) -> Option<String> {
    let mut result = SearchPath::new();
    for record in store
        .records()
        .iter()
        .filter(|r| CatScope::All.includes(r.category()))
    {
        result.append(record.key());
    }
    result.into_option()
}
