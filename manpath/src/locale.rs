//! Locale identifier decomposition.

use serde::Serialize;

/// The parts of a glibc-style locale name, `language_TERRITORY.CODESET@modifier`.
///
/// Every field is always present; parts missing from the name are empty.
///
/// # Examples
///
/// ```
/// use manpath::LocaleParts;
///
/// let parts = LocaleParts::split("de_AT.UTF-8@euro");
/// assert_eq!(parts.language, "de");
/// assert_eq!(parts.territory, "AT");
/// assert_eq!(parts.codeset, "UTF-8");
/// assert_eq!(parts.modifier, "euro");
///
/// let bare = LocaleParts::split("fr");
/// assert_eq!(bare, LocaleParts::new("fr", "", "", ""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocaleParts {
    /// Language code, or the whole name for aliases that don't explode.
    pub language: String,
    /// Territory, after `_`.
    pub territory: String,
    /// Codeset, after `.`.
    pub codeset: String,
    /// Modifier, after `@`.
    pub modifier: String,
}

impl LocaleParts {
    /// Builds a `LocaleParts` from its fields.
    #[must_use]
    pub fn new(language: &str, territory: &str, codeset: &str, modifier: &str) -> Self {
        Self {
            language: language.to_string(),
            territory: territory.to_string(),
            codeset: codeset.to_string(),
            modifier: modifier.to_string(),
        }
    }

    /// Splits a locale name into its parts.
    ///
    /// A name whose first character is already a separator has no language;
    /// it is kept whole as the language (it is probably an alias).
    #[must_use]
    pub fn split(locale: &str) -> Self {
        let language_end = locale.find(['_', '.', '@']).unwrap_or(locale.len());
        if language_end == 0 {
            return Self {
                language: locale.to_string(),
                ..Self::default()
            };
        }

        let mut parts = Self {
            language: locale[..language_end].to_string(),
            ..Self::default()
        };
        let mut rest = &locale[language_end..];

        if let Some(after) = rest.strip_prefix('_') {
            let end = after.find(['.', '@']).unwrap_or(after.len());
            parts.territory = after[..end].to_string();
            rest = &after[end..];
        }

        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find('@').unwrap_or(after.len());
            parts.codeset = after[..end].to_string();
            rest = &after[end..];
        }

        if let Some(after) = rest.strip_prefix('@') {
            parts.modifier = after.to_string();
        }

        parts
    }

    /// Whether this is the untranslated `C` or `POSIX` locale.
    #[must_use]
    pub fn is_untranslated(&self) -> bool {
        self.language == "C" || self.language == "POSIX"
    }

    /// Whether a directory named after `candidate` serves this locale.
    ///
    /// Languages must be equal. An empty territory or modifier on the
    /// candidate matches anything; a non-empty one must be equal.
    #[must_use]
    pub fn accepts(&self, candidate: &Self) -> bool {
        self.language == candidate.language
            && (candidate.territory.is_empty() || self.territory == candidate.territory)
            && (candidate.modifier.is_empty() || self.modifier == candidate.modifier)
    }
}
