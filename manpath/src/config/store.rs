//! Ordered, category-tagged record store.
//!
//! Every directive read from a configuration file becomes one
//! [`ConfigRecord`]. Records keep their insertion order and several may share
//! a key and category, so the store distinguishes "the definition" (first
//! match) from "every mapping for this key" (all matches, in order).

use serde::Serialize;

/// Which configuration concept a record represents.
///
/// The `*User` variants come from the per-user configuration file, the
/// others from the system-wide one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `SECTION` list entry from the user file.
    SectionUser,
    /// `SECTION` list entry from the system file.
    Section,
    /// `DEFINE` from the user file.
    DefineUser,
    /// `DEFINE` from the system file.
    Define,
    /// `MANDB_MAP` from the user file.
    MandbMapUser,
    /// `MANDB_MAP` from the system file.
    MandbMap,
    /// `MANPATH_MAP` (bin directory to man directory).
    ManpathMap,
    /// `MANDATORY_MANPATH`.
    Mandatory,
}

impl Category {
    /// The user/system pair this category belongs to, if any.
    ///
    /// Returns `(user, system)`.
    #[must_use]
    pub const fn scoped_pair(self) -> Option<(Self, Self)> {
        match self {
            Self::SectionUser | Self::Section => Some((Self::SectionUser, Self::Section)),
            Self::DefineUser | Self::Define => Some((Self::DefineUser, Self::Define)),
            Self::MandbMapUser | Self::MandbMap => Some((Self::MandbMapUser, Self::MandbMap)),
            Self::ManpathMap | Self::Mandatory => None,
        }
    }

    /// Whether this record came from the per-user configuration file.
    #[must_use]
    pub const fn is_user(self) -> bool {
        matches!(self, Self::SectionUser | Self::DefineUser | Self::MandbMapUser)
    }
}

/// A single configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    key: String,
    content: String,
    category: Category,
}

impl ConfigRecord {
    /// The record key (a directory, a definition name, a section name).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The record content (a mapped directory or a definition value).
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The record category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

/// Position of a match inside the store, used to resume a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

/// Append-only store of configuration records.
///
/// # Examples
///
/// ```
/// use manpath::config::{Category, ConfigStore};
///
/// let mut store = ConfigStore::new();
/// store.add("/usr/share/man", "/var/cache/man", Category::MandbMap);
/// store.add("/usr/share/man", "/var/cache/man2", Category::MandbMap);
///
/// assert_eq!(
///     store.lookup_first("/usr/share/man", Category::MandbMap),
///     Some("/var/cache/man")
/// );
/// assert_eq!(store.matching("/usr/share/man", Category::MandbMap).count(), 2);
/// assert_eq!(store.lookup_first("/usr/share/man", Category::MandbMapUser), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    records: Vec<ConfigRecord>,
}

impl ConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn add(&mut self, key: impl Into<String>, content: impl Into<String>, category: Category) {
        let record = ConfigRecord {
            key: key.into(),
            content: content.into(),
            category,
        };
        log::debug!(
            "`{}'\t`{}'\t`{:?}'",
            record.key,
            record.content,
            record.category
        );
        self.records.push(record);
    }

    /// Content of the first record with this key and exactly this category.
    #[must_use]
    pub fn lookup_first(&self, key: &str, category: Category) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.category == category && r.key == key)
            .map(ConfigRecord::content)
    }

    /// The next record with this key and category after `cursor`.
    ///
    /// Passing `None` starts from the beginning of the store. The returned
    /// cursor resumes the search after the returned record.
    #[must_use]
    pub fn lookup_next(
        &self,
        key: &str,
        category: Category,
        cursor: Option<Cursor>,
    ) -> Option<(Cursor, &ConfigRecord)> {
        let start = cursor.map_or(0, |Cursor(pos)| pos + 1);
        self.records
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, r)| r.category == category && r.key == key)
            .map(|(pos, r)| (Cursor(pos), r))
    }

    /// All records with this key and category, in insertion order.
    pub fn matching<'a>(
        &'a self,
        key: &'a str,
        category: Category,
    ) -> impl Iterator<Item = &'a ConfigRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.category == category && r.key == key)
    }

    /// All records of a category, in insertion order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ConfigRecord> + '_ {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Distinct keys of a category, in first-seen order.
    ///
    /// Sections and definitions are resolved as a whole: if any user-scoped
    /// record exists, only user-scoped keys are returned, otherwise the
    /// system-scoped ones. Other categories return their own keys.
    #[must_use]
    pub fn category_values(&self, category: Category) -> Vec<String> {
        let effective = match category.scoped_pair() {
            Some((Category::MandbMapUser, _)) | None => category,
            Some((user, _)) if self.in_category(user).next().is_some() => user,
            Some((_, system)) => system,
        };

        let mut keys: Vec<String> = Vec::new();
        for record in self.in_category(effective) {
            if !keys.iter().any(|k| k == &record.key) {
                keys.push(record.key.clone());
            }
        }
        keys
    }

    /// Every record, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ConfigRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ConfigStore {
        let mut store = ConfigStore::new();
        store.add("/bin", "/usr/share/man", Category::ManpathMap);
        store.add("/usr/bin", "/usr/share/man", Category::ManpathMap);
        store.add("/bin", "/usr/local/man", Category::ManpathMap);
        store.add("PAGER", "less", Category::Define);
        store.add("PAGER", "more", Category::Define);
        store
    }

    #[test]
    fn test_lookup_first_returns_earliest() {
        let store = sample_store();
        assert_eq!(store.lookup_first("PAGER", Category::Define), Some("less"));
        assert_eq!(store.lookup_first("PAGER", Category::DefineUser), None);
        assert_eq!(store.lookup_first("/sbin", Category::ManpathMap), None);
    }

    #[test]
    fn test_lookup_first_result_outlives_key() {
        let store = sample_store();
        let content = {
            let key = String::from("/bin");
            store.lookup_first(&key, Category::ManpathMap)
        };
        assert_eq!(content, Some("/usr/share/man"));
    }

    #[test]
    fn test_lookup_next_walks_all_matches() {
        let store = sample_store();

        let (cursor, first) = store.lookup_next("/bin", Category::ManpathMap, None).unwrap();
        assert_eq!(first.content(), "/usr/share/man");

        let (cursor, second) = store
            .lookup_next("/bin", Category::ManpathMap, Some(cursor))
            .unwrap();
        assert_eq!(second.content(), "/usr/local/man");

        assert!(store
            .lookup_next("/bin", Category::ManpathMap, Some(cursor))
            .is_none());
    }

    #[test]
    fn test_matching_agrees_with_cursor_walk() {
        let store = sample_store();
        let contents: Vec<_> = store
            .matching("/bin", Category::ManpathMap)
            .map(ConfigRecord::content)
            .collect();
        assert_eq!(contents, vec!["/usr/share/man", "/usr/local/man"]);
    }

    #[test]
    fn test_category_values_prefers_user_sections() {
        let mut store = ConfigStore::new();
        store.add("1", "", Category::Section);
        store.add("8", "", Category::Section);
        assert_eq!(store.category_values(Category::Section), vec!["1", "8"]);

        store.add("3", "", Category::SectionUser);
        store.add("1", "", Category::SectionUser);
        store.add("3", "", Category::SectionUser);
        assert_eq!(store.category_values(Category::Section), vec!["3", "1"]);
        assert_eq!(store.category_values(Category::SectionUser), vec!["3", "1"]);
    }

    #[test]
    fn test_category_values_plain_category() {
        let store = sample_store();
        assert_eq!(
            store.category_values(Category::ManpathMap),
            vec!["/bin", "/usr/bin"]
        );
        assert!(store.category_values(Category::Mandatory).is_empty());
    }

    #[test]
    fn test_category_values_keeps_mandb_scopes_apart() {
        let mut store = ConfigStore::new();
        store.add("/usr/share/man", "/var/cache/man", Category::MandbMap);
        store.add("/home/u/man", "/home/u/.cache", Category::MandbMapUser);
        store.add("pager", "less", Category::Define);
        store.add("pager", "most", Category::DefineUser);
        store.add("browser", "lynx", Category::DefineUser);

        assert_eq!(store.category_values(Category::MandbMap), vec!["/usr/share/man"]);
        assert_eq!(store.category_values(Category::MandbMapUser), vec!["/home/u/man"]);
        assert_eq!(store.category_values(Category::Define), vec!["pager", "browser"]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = sample_store();
        assert_eq!(store.len(), 5);
        store.reset();
        assert!(store.is_empty());
        store.reset();
        assert!(store.is_empty());
    }

    #[test]
    fn test_category_scope() {
        assert!(Category::MandbMapUser.is_user());
        assert!(!Category::MandbMap.is_user());
        assert_eq!(
            Category::Define.scoped_pair(),
            Some((Category::DefineUser, Category::Define))
        );
        assert_eq!(Category::Mandatory.scoped_pair(), None);
    }
}
