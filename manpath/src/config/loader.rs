//! Configuration file discovery and loading.
//!
//! The per-user file (`~/.manpath`) is read first, then the system-wide
//! `/etc/manpath.config`. Both feed one [`ConfigStore`]; records from the
//! user file that have a user-scoped category are tagged as such.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catpath::fsstnd;
use crate::config::directive::{CatdirSpec, Directive};
use crate::config::environment::Environment;
use crate::config::store::{Category, ConfigStore};
use crate::error::{Error, Result};
use crate::logging::Logger;

/// Default location of the system-wide configuration file.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/manpath.config";

/// Which configuration file a directive came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The per-user file.
    User,
    /// The system-wide file.
    System,
}

/// Process-wide settings produced by loading, consumed by page formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// `MINCATWIDTH`.
    pub min_cat_width: i32,
    /// `MAXCATWIDTH`.
    pub max_cat_width: i32,
    /// `CATWIDTH`; zero means "use the terminal width".
    pub cat_width: i32,
    /// `NOCACHE` was seen.
    pub disable_cache: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_cat_width: 80,
            max_cat_width: 80,
            cat_width: 0,
            disable_cache: false,
        }
    }
}

/// Where to find configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Explicit per-user file; defaults to `$HOME/.manpath`.
    pub user_config_file: Option<PathBuf>,
    /// System-wide file.
    pub system_config_file: PathBuf,
    /// Continue when the system file cannot be opened.
    pub optional_system_config: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            user_config_file: None,
            system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
            optional_system_config: false,
        }
    }
}

/// A configuration file that contributed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Which scope its records were tagged with.
    pub scope: Scope,
}

/// The loaded configuration and its lifecycle.
///
/// A `Configuration` starts empty, is filled by [`Configuration::load`]
/// at most once, and is emptied again by [`Configuration::reset`].
///
/// # Examples
///
/// ```
/// use manpath::config::{Configuration, Category, Scope};
/// use manpath::{LogLevel, Logger};
/// use std::path::Path;
///
/// let mut config = Configuration::new();
/// config
///     .load_str(
///         "MANDB_MAP /usr/share/man /var/cache/man\nNOCACHE\n",
///         Path::new("inline"),
///         Scope::System,
///         &Logger::new(LogLevel::Quiet),
///     )
///     .unwrap();
///
/// assert!(config.settings().disable_cache);
/// assert_eq!(
///     config.store().lookup_first("/usr/share/man", Category::MandbMap),
///     Some("/var/cache/man")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    store: ConfigStore,
    settings: Settings,
    sources: Vec<ConfigSource>,
    loaded: bool,
}

impl Configuration {
    /// Creates an empty, unloaded configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`Configuration::load`] has completed since the last reset.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The record store.
    #[must_use]
    pub const fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Width and cache settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Files that were read, in reading order.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Reads the user and system configuration files.
    ///
    /// Does nothing if the configuration is already loaded. A missing or
    /// unreadable user file is skipped. The system file is skipped when
    /// `env.disable_system_config` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigUnreadable`] if the system file cannot be read
    /// and `options.optional_system_config` is false, and
    /// [`Error::ConfigParse`] if either file contains a line that is not a
    /// valid directive.
    pub fn load(&mut self, options: &LoadOptions, env: &Environment, logger: &Logger) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        let user_file = options
            .user_config_file
            .clone()
            .or_else(|| env.user_config_path());
        if let Some(path) = user_file {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    log::debug!("From the config file {}:", path.display());
                    self.load_str(&text, &path, Scope::User, logger)?;
                }
                Err(e) => log::debug!("skipping user config {}: {e}", path.display()),
            }
        }

        if !env.disable_system_config {
            let path = &options.system_config_file;
            match fs::read_to_string(path) {
                Ok(text) => {
                    log::debug!("From the config file {}:", path.display());
                    self.load_str(&text, path, Scope::System, logger)?;
                }
                Err(e) if options.optional_system_config => {
                    log::debug!("can't open {}; continuing anyway: {e}", path.display());
                }
                Err(source) => {
                    return Err(Error::ConfigUnreadable {
                        path: path.clone(),
                        source,
                    })
                }
            }
        }

        self.loaded = true;
        Ok(())
    }

    /// Applies every directive in `text` with the given scope.
    ///
    /// `path` is used for error messages and recorded as a source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for the first line that is not a valid
    /// directive. Lines before it have already been applied.
    pub fn load_str(&mut self, text: &str, path: &Path, scope: Scope, logger: &Logger) -> Result<()> {
        for (index, line) in text.lines().enumerate() {
            let directive = Directive::parse(line).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: e.to_string(),
            })?;
            if let Some(directive) = directive {
                self.apply(directive, scope, logger);
            }
        }
        self.sources.push(ConfigSource {
            path: path.to_path_buf(),
            scope,
        });
        Ok(())
    }

    /// Records one directive.
    pub fn apply(&mut self, directive: Directive, scope: Scope, logger: &Logger) {
        let user = scope == Scope::User;
        match directive {
            Directive::NoCache => self.settings.disable_cache = true,
            Directive::Mandatory { mandir } => {
                log::debug!("Mandatory mandir `{mandir}'.");
                self.store.add(mandir, "", Category::Mandatory);
            }
            Directive::ManpathMap { bindir, mandir } => {
                log::debug!("Path `{bindir}' mapped to mandir `{mandir}'.");
                self.store.add(bindir, mandir, Category::ManpathMap);
            }
            Directive::MandbMap { mandir, catdir } => {
                let catdir = match catdir {
                    CatdirSpec::SameAsMandir => mandir.clone(),
                    CatdirSpec::Fsstnd => fsstnd(&mandir, logger),
                    CatdirSpec::Dir(dir) => dir,
                };
                log::debug!(
                    "{} mandir `{mandir}', catdir `{catdir}'.",
                    if user { "User" } else { "Global" }
                );
                let category = if user {
                    Category::MandbMapUser
                } else {
                    Category::MandbMap
                };
                self.store.add(mandir, catdir, category);
            }
            Directive::Define { name, value } => {
                log::debug!("Defined `{name}' as `{value}'.");
                let category = if user {
                    Category::DefineUser
                } else {
                    Category::Define
                };
                self.store.add(name, value, category);
            }
            Directive::Sections(sections) => {
                let category = if user {
                    Category::SectionUser
                } else {
                    Category::Section
                };
                for section in sections {
                    log::debug!("Added section `{section}'.");
                    self.store.add(section, "", category);
                }
            }
            Directive::MinCatWidth(width) => self.settings.min_cat_width = width,
            Directive::MaxCatWidth(width) => self.settings.max_cat_width = width,
            Directive::CatWidth(width) => self.settings.cat_width = width,
        }
    }

    /// Clears records, settings and the loaded flag.
    pub fn reset(&mut self) {
        self.store.reset();
        self.settings = Settings::default();
        self.sources.clear();
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::TempDir;

    fn quiet() -> Logger {
        Logger::new(LogLevel::Quiet)
    }

    fn options_for(dir: &TempDir) -> LoadOptions {
        LoadOptions {
            user_config_file: Some(dir.path().join("user.manpath")),
            system_config_file: dir.path().join("manpath.config"),
            optional_system_config: false,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.min_cat_width, 80);
        assert_eq!(settings.max_cat_width, 80);
        assert_eq!(settings.cat_width, 0);
        assert!(!settings.disable_cache);
    }

    #[test]
    fn test_load_reads_user_then_system() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir);
        fs::write(
            options.user_config_file.as_ref().unwrap(),
            "DEFINE pager most\nMANDB_MAP /home/u/man /home/u/cat\nSECTION 1 8\n",
        )
        .unwrap();
        fs::write(
            &options.system_config_file,
            "DEFINE pager less\nMANDB_MAP /usr/share/man /var/cache/man\nCATWIDTH 72\n",
        )
        .unwrap();

        let mut config = Configuration::new();
        config
            .load(&options, &Environment::default(), &quiet())
            .unwrap();

        assert!(config.is_loaded());
        let store = config.store();
        assert_eq!(store.lookup_first("pager", Category::DefineUser), Some("most"));
        assert_eq!(store.lookup_first("pager", Category::Define), Some("less"));
        assert_eq!(
            store.lookup_first("/home/u/man", Category::MandbMapUser),
            Some("/home/u/cat")
        );
        assert_eq!(store.category_values(Category::Section), vec!["1", "8"]);
        assert_eq!(config.settings().cat_width, 72);
        assert_eq!(config.sources().len(), 2);
        assert_eq!(config.sources()[0].scope, Scope::User);
    }

    #[test]
    fn test_load_is_one_shot_until_reset() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir);
        fs::write(&options.system_config_file, "MANDATORY_MANPATH /usr/man\n").unwrap();

        let mut config = Configuration::new();
        config.load(&options, &Environment::default(), &quiet()).unwrap();
        config.load(&options, &Environment::default(), &quiet()).unwrap();
        assert_eq!(config.store().len(), 1);

        config.reset();
        assert!(!config.is_loaded());
        assert!(config.store().is_empty());

        config.load(&options, &Environment::default(), &quiet()).unwrap();
        assert_eq!(config.store().len(), 1);
    }

    #[test]
    fn test_missing_system_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir);

        let mut config = Configuration::new();
        let err = config
            .load(&options, &Environment::default(), &quiet())
            .unwrap_err();
        assert!(matches!(err, Error::ConfigUnreadable { .. }));
        assert!(!config.is_loaded());
    }

    #[test]
    fn test_missing_system_config_optional() {
        let dir = TempDir::new().unwrap();
        let options = LoadOptions {
            optional_system_config: true,
            ..options_for(&dir)
        };

        let mut config = Configuration::new();
        config.load(&options, &Environment::default(), &quiet()).unwrap();
        assert!(config.is_loaded());
        assert!(config.sources().is_empty());
    }

    #[test]
    fn test_disable_system_config() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir);
        let env = Environment {
            disable_system_config: true,
            ..Environment::default()
        };

        let mut config = Configuration::new();
        config.load(&options, &env, &quiet()).unwrap();
        assert!(config.store().is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir);
        fs::write(
            &options.system_config_file,
            "# header\nMANDATORY_MANPATH /usr/man\nBOGUS directive\n",
        )
        .unwrap();

        let mut config = Configuration::new();
        let err = config
            .load(&options, &Environment::default(), &quiet())
            .unwrap_err();
        match err {
            Error::ConfigParse { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("BOGUS"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mandb_map_catdir_forms() {
        let mut config = Configuration::new();
        config
            .load_str(
                "MANDB_MAP /opt/man\nMANDB_MAP /usr/share/man FSSTND\n",
                Path::new("inline"),
                Scope::System,
                &quiet(),
            )
            .unwrap();
        let store = config.store();
        assert_eq!(store.lookup_first("/opt/man", Category::MandbMap), Some("/opt/man"));
        assert_eq!(
            store.lookup_first("/usr/share/man", Category::MandbMap),
            Some("/var/catman/share")
        );
    }

    #[test]
    fn test_user_mandatory_is_not_user_scoped() {
        let mut config = Configuration::new();
        config
            .load_str(
                "MANDATORY_MANPATH /home/u/man\nMANPATH_MAP /home/u/bin /home/u/man\n",
                Path::new("inline"),
                Scope::User,
                &quiet(),
            )
            .unwrap();
        let store = config.store();
        assert_eq!(store.in_category(Category::Mandatory).count(), 1);
        assert_eq!(store.in_category(Category::ManpathMap).count(), 1);
    }
}
