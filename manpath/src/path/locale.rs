//! Locale-specific manual page directories.
//!
//! Translated pages live in locale-named subdirectories of a manual
//! hierarchy (`/usr/share/man/de`, `/usr/share/man/pt_BR`). Expanding a
//! search path for `LANGUAGE=fr:de` gives, for each locale in turn, every
//! hierarchy's matching subdirectories, and finally the untranslated
//! hierarchies themselves:
//!
//! ```text
//! /usr/share/man/fr:/usr/local/share/man/fr:
//! /usr/share/man/de:/usr/local/share/man/de:
//! /usr/share/man:/usr/local/share/man
//! ```
//!
//! Duplicates across locales are left for [`PathList::build`](crate::path::PathList::build).

use std::fs;
use std::path::Path;

use crate::locale::LocaleParts;
use crate::path::append::SearchPath;
use crate::path::probe::DirStatus;

/// Expands `paths` for a single locale.
///
/// `C` and `POSIX` return `paths` unchanged. Otherwise every directory's
/// children (except `man*` section directories) are matched against the
/// locale, in name order; for English the directory itself follows its
/// children. Returns `None` when nothing matched.
///
/// # Examples
///
/// ```
/// use manpath::path::expand_for_locale;
///
/// assert_eq!(
///     expand_for_locale("/usr/share/man:/opt/man", "C"),
///     Some("/usr/share/man:/opt/man".to_string())
/// );
/// assert_eq!(expand_for_locale("/nonexistent/man", "de_DE"), None);
/// ```
#[must_use]
pub fn expand_for_locale(paths: &str, locale: &str) -> Option<String> {
    let query = LocaleParts::split(locale);
    if query.is_untranslated() {
        return Some(paths.to_string());
    }

    let mut result = SearchPath::new();
    for dir in paths.split(':') {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| !name.starts_with("man"))
            .collect();
        names.sort();

        for name in names {
            let full = Path::new(dir).join(&name);
            if !DirStatus::probe(&full).is_directory() {
                continue;
            }
            if query.accepts(&LocaleParts::split(&name)) {
                result.append(&full.to_string_lossy());
            }
        }

        // English pages mostly sit at the top level, with the odd en_GB
        // subdirectory.
        if query.language == "en" {
            result.append(dir);
        }
    }

    result.into_option()
}

/// Expands `paths` for each locale in a colon-separated preference list.
///
/// Per-locale results are concatenated in preference order, followed by the
/// untranslated directories. An empty locale list returns `paths`.
///
/// # Examples
///
/// ```
/// use manpath::path::expand_for_locales;
///
/// assert_eq!(expand_for_locales("/opt/man", ""), "/opt/man");
/// assert_eq!(expand_for_locales("/opt/man", "xx:yy"), "/opt/man");
/// ```
#[must_use]
pub fn expand_for_locales(paths: &str, locales: &str) -> String {
    log::debug!("add_nls_manpaths(): processing {paths}");
    if locales.is_empty() {
        return paths.to_string();
    }

    let mut pieces: Vec<String> = Vec::new();
    for locale in locales.split(':').filter(|l| !l.is_empty()) {
        log::debug!("checking for locale {locale}");
        pieces.extend(expand_for_locale(paths, locale));
    }
    pieces.extend(expand_for_locale(paths, "C"));

    pieces.join(":")
}
