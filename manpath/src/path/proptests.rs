//! Property-based tests for path string handling.

use super::append::path_append;
use super::locale::expand_for_locale;
use crate::locale::LocaleParts;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "/[a-z0-9_]{1,8}(/[a-z0-9_]{1,8}){0,3}"
}

// Colon-joined paths, possibly with empty elements.
fn path_string_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![4 => segment_strategy(), 1 => Just(String::new())],
        1..8,
    )
    .prop_map(|segments| segments.join(":"))
}

fn locale_strategy() -> impl Strategy<Value = LocaleParts> {
    (
        "[a-z]{2,3}",
        "([A-Z]{2})?",
        "([A-Za-z0-9-]{1,8})?",
        "([a-z]{1,6})?",
    )
        .prop_map(|(language, territory, codeset, modifier)| {
            LocaleParts::new(&language, &territory, &codeset, &modifier)
        })
}

fn render(parts: &LocaleParts) -> String {
    let mut name = parts.language.clone();
    if !parts.territory.is_empty() {
        name.push('_');
        name.push_str(&parts.territory);
    }
    if !parts.codeset.is_empty() {
        name.push('.');
        name.push_str(&parts.codeset);
    }
    if !parts.modifier.is_empty() {
        name.push('@');
        name.push_str(&parts.modifier);
    }
    name
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Appending a path to itself changes nothing
    #[test]
    fn path_append_self_is_identity(path in path_string_strategy()) {
        prop_assert_eq!(path_append(&path, &path), path);
    }

    // The existing path is always kept as a prefix
    #[test]
    fn path_append_keeps_existing_prefix(
        existing in path_string_strategy(),
        candidate in path_string_strategy(),
    ) {
        let joined = path_append(&existing, &candidate);
        prop_assert!(joined.starts_with(&existing));
    }

    // Nothing already present is appended again
    #[test]
    fn path_append_adds_only_new_segments(
        existing in path_string_strategy().prop_filter("non-empty", |p| !p.is_empty()),
        candidate in path_string_strategy(),
    ) {
        let joined = path_append(&existing, &candidate);
        let seen: Vec<&str> = existing.split(':').collect();
        let added = joined[existing.len()..].trim_start_matches(':');
        for segment in added.split(':').filter(|s| !s.is_empty()) {
            prop_assert!(!seen.contains(&segment));
        }
    }

    // Splitting a rendered locale recovers its parts
    #[test]
    fn locale_split_recovers_parts(parts in locale_strategy()) {
        prop_assert_eq!(LocaleParts::split(&render(&parts)), parts);
    }

    // The C locale never rewrites a path
    #[test]
    fn c_locale_is_identity(path in path_string_strategy()) {
        prop_assert_eq!(expand_for_locale(&path, "C"), Some(path.clone()));
        prop_assert_eq!(expand_for_locale(&path, "POSIX"), Some(path));
    }
}
