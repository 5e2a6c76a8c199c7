//! Alternate-system manual page directories.
//!
//! With `SYSTEM=newos`, every search directory `d` is replaced by
//! `d/newos` where that exists. The literal system name `man` stands for
//! the native pages and keeps the directories as they are.

use crate::logging::Logger;
use crate::path::append::SearchPath;
use crate::path::probe::DirStatus;

/// System name that selects the unmodified directories.
pub const NATIVE_SYSTEM: &str = "man";

/// Rewrites `paths` for a list of alternate systems.
///
/// `systems` is split on `,` and `:`. If it is empty, `paths` is returned
/// unchanged; if no augmented directory exists, `paths` is returned too, so
/// the result is never empty merely because the systems are unknown.
/// Callers resolve the `$SYSTEM` fallback before calling.
///
/// # Examples
///
/// ```
/// use manpath::path::augment_for_systems;
/// use manpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Quiet);
/// assert_eq!(augment_for_systems(None, "/usr/man", &logger), "/usr/man");
/// assert_eq!(augment_for_systems(Some("man"), "/usr/man", &logger), "/usr/man");
/// assert_eq!(augment_for_systems(Some("nosuchos"), "/usr/man", &logger), "/usr/man");
/// ```
#[must_use]
pub fn augment_for_systems(systems: Option<&str>, paths: &str, logger: &Logger) -> String {
    let Some(systems) = systems.filter(|s| !s.is_empty()) else {
        return paths.to_string();
    };

    let mut result = SearchPath::new();
    for system in systems.split([',', ':']).filter(|s| !s.is_empty()) {
        if system == NATIVE_SYSTEM {
            result.append(paths);
            continue;
        }

        for element in paths.split(':') {
            let candidate = format!("{element}/{system}");
            match DirStatus::probe(&candidate) {
                DirStatus::Directory => {
                    log::debug!("adding {candidate} to manpathlist");
                    result.append(&candidate);
                }
                DirStatus::NotDirectory => {
                    logger.warn(&format!("{candidate} isn't a directory"));
                }
                DirStatus::Unreadable(kind) => log::debug!("can't stat {candidate}: {kind}"),
            }
        }
    }

    match result.into_option() {
        Some(augmented) => augmented,
        None => {
            log::debug!("add_system_manpath(): internal manpath equates to NULL");
            paths.to_string()
        }
    }
}
