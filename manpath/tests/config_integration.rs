//! Integration tests for configuration loading and the queries built on it.
//!
//! Tests that touch process environment variables are marked `#[serial]`.

mod common;

use common::{isolated_env, ManTree};
use manpath::config::Environment;
use manpath::{CatScope, Error};
use serial_test::serial;

const SYSTEM_CONFIG: &str = "\
# Global configuration
MANDATORY_MANPATH /usr/man
MANDB_MAP /usr/man /var/cache/man/fsstnd
MANDB_MAP /usr/share/man /var/cache/man
MANDB_MAP /usr/local/man FSSTND
MANDB_MAP /opt/man
DEFINE pager less -s
DEFINE whatis_grep_flags -i
SECTION 1 n l 8 3 0 2 5 4 9 6 7
MINCATWIDTH 60
MAXCATWIDTH 100
MANBIN /usr/bin/man
NOAUTOPATH
";

const USER_CONFIG: &str = "\
MANDB_MAP /usr/share/man /home/u/.cache/man
MANDB_MAP /home/u/man /home/u/.cache/man/own
DEFINE pager most
SECTION 3 1
NOCACHE
";

fn loaded(user: Option<&str>) -> (ManTree, manpath::ManpathResolver) {
    let tree = ManTree::new();
    if let Some(contents) = user {
        tree.user_config(contents);
    }
    let mut resolver = tree.resolver(SYSTEM_CONFIG, isolated_env());
    resolver.load().unwrap();
    (tree, resolver)
}

#[test]
fn test_catpath_queries() {
    let (_tree, resolver) = loaded(None);

    assert_eq!(
        resolver.catpath("/usr/share/man/man1", CatScope::System).as_deref(),
        Some("/var/cache/man/cat1")
    );
    assert_eq!(
        resolver.catpath("/usr/local/man/man8", CatScope::All).as_deref(),
        Some("/var/catman/local/cat8")
    );
    assert_eq!(
        resolver.catpath("/opt/man/fr/man5/x.5", CatScope::All).as_deref(),
        Some("/opt/man/fr/cat5/x.5")
    );
    assert_eq!(resolver.catpath("/srv/man", CatScope::All), None);
}

#[test]
fn test_user_maps_shadow_system_maps() {
    let (_tree, resolver) = loaded(Some(USER_CONFIG));

    assert_eq!(
        resolver.catpath("/usr/share/man/man1", CatScope::User).as_deref(),
        Some("/home/u/.cache/man/cat1")
    );
    assert_eq!(
        resolver.catpath("/usr/share/man/man1", CatScope::System).as_deref(),
        Some("/var/cache/man/cat1")
    );
    // User records are read first, so they win under the combined scope.
    assert_eq!(
        resolver.catpath("/usr/share/man/man1", CatScope::All).as_deref(),
        Some("/home/u/.cache/man/cat1")
    );

    assert_eq!(
        resolver.cat_manpath("/usr/share/man:/usr/man:/home/u/man:/srv/man"),
        "/home/u/.cache/man:/var/cache/man/fsstnd:/home/u/.cache/man/own:/srv/man"
    );
}

#[test]
fn test_global_mandirs() {
    let (_tree, resolver) = loaded(Some(USER_CONFIG));

    assert!(resolver.is_global_mandir("/usr/share/man/de"));
    assert!(!resolver.is_global_mandir("/home/u/man"));
    assert_eq!(
        resolver.mandb_manpath().as_deref(),
        Some("/usr/share/man:/home/u/man:/usr/man:/usr/local/man:/opt/man")
    );
}

#[test]
fn test_sections_definitions_and_settings() {
    let (_tree, resolver) = loaded(None);
    assert_eq!(
        resolver.sections(),
        ["1", "n", "l", "8", "3", "0", "2", "5", "4", "9", "6", "7"]
    );
    assert_eq!(resolver.definition("pager", true), Some("less -s"));
    assert_eq!(resolver.settings().min_cat_width, 60);
    assert_eq!(resolver.settings().max_cat_width, 100);
    assert!(!resolver.settings().disable_cache);

    let (_tree, resolver) = loaded(Some(USER_CONFIG));
    assert_eq!(resolver.sections(), ["3", "1"]);
    assert_eq!(resolver.definition("pager", true), Some("most"));
    assert_eq!(resolver.definition("pager", false), Some("less -s"));
    assert!(resolver.settings().disable_cache);
}

#[test]
fn test_user_parse_error_is_fatal() {
    let tree = ManTree::new();
    tree.user_config("MANDB_MAP\n");
    let mut resolver = tree.resolver(SYSTEM_CONFIG, isolated_env());

    match resolver.load().unwrap_err() {
        Error::ConfigParse { path, line, .. } => {
            assert_eq!(path, tree.root().join("home/.manpath"));
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_sources_are_recorded_in_order() {
    let (tree, resolver) = loaded(Some(USER_CONFIG));
    let sources: Vec<_> = resolver
        .configuration()
        .sources()
        .iter()
        .map(|s| s.path.clone())
        .collect();
    assert_eq!(
        sources,
        [
            tree.root().join("home/.manpath"),
            tree.root().join("etc/manpath.config")
        ]
    );
}

#[test]
fn test_configuration_serializes() -> anyhow::Result<()> {
    let (_tree, resolver) = loaded(Some(USER_CONFIG));
    let config = resolver.configuration();

    let sources = serde_json::to_value(config.sources())?;
    assert_eq!(sources[0]["scope"], "user");
    assert_eq!(sources[1]["scope"], "system");

    let settings = serde_json::to_value(config.settings())?;
    assert_eq!(settings["min_cat_width"], 60);
    assert_eq!(settings["disable_cache"], true);

    let records = serde_json::to_value(config.store().records())?;
    assert_eq!(records[0]["key"], "/usr/share/man");
    assert_eq!(records[0]["content"], "/home/u/.cache/man");
    assert_eq!(records[0]["category"], "mandb_map_user");

    Ok(())
}

// ============================================================================
// Process environment
// ============================================================================

struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, old_value }
    }

    fn remove(key: &'static str) -> Self {
        let old_value = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => std::env::set_var(self.key, value),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
#[serial]
fn test_home_directory_user_config() {
    let tree = ManTree::new();
    tree.file("home/.manpath", "DEFINE pager most\n");
    let _home = EnvGuard::set("HOME", &tree.path("home"));
    let _manpath = EnvGuard::remove("MANPATH");
    let _disable = EnvGuard::set("MAN_TEST_DISABLE_SYSTEM_CONFIG", "1");

    let env = Environment::from_process();
    assert!(env.disable_system_config);
    assert!(env.manpath_override().is_none());

    let mut resolver = manpath::ManpathResolver::new(
        manpath::ResolverOptions::new(),
        env,
        common::quiet(),
    );
    resolver.load().unwrap();
    assert_eq!(resolver.definition("pager", true), Some("most"));
}
