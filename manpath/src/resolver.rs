//! Manual page search path resolution.
//!
//! [`ManpathResolver`] owns the loaded configuration and the environment
//! snapshot and answers every manpath query from them.

use std::fmt;
use std::path::PathBuf;

use crate::catpath::{self, CatScope};
use crate::config::environment::Environment;
use crate::config::loader::{Configuration, LoadOptions, Settings};
use crate::config::store::Category;
use crate::error::Result;
use crate::logging::Logger;
use crate::path::append::SearchPath;
use crate::path::list::{PathList, DEFAULT_MAX_DIRS};
use crate::path::locale::expand_for_locales;
use crate::path::probe::{DirStatus, GlobExpander, PathExpander};
use crate::path::system::augment_for_systems;

/// Used when no mandatory directory exists.
pub const FALLBACK_MANPATH: &str = "/usr/man";

/// Knobs for a [`ManpathResolver`].
///
/// # Examples
///
/// ```
/// use manpath::ResolverOptions;
///
/// let options = ResolverOptions::new()
///     .with_systems("newos,man")
///     .with_max_dirs(64)
///     .with_optional_system_config(true);
/// assert_eq!(options.max_dirs, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Alternate systems; `None` falls back to `$SYSTEM`.
    pub systems: Option<String>,
    /// Subdirectory checked ahead of every directory derived from `$PATH`.
    pub override_dir: Option<String>,
    /// Capacity of every directory list.
    pub max_dirs: usize,
    /// Configuration file locations.
    pub load: LoadOptions,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            systems: None,
            override_dir: None,
            max_dirs: DEFAULT_MAX_DIRS,
            load: LoadOptions::default(),
        }
    }
}

impl ResolverOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternate systems list.
    #[must_use]
    pub fn with_systems(mut self, systems: impl Into<String>) -> Self {
        self.systems = Some(systems.into());
        self
    }

    /// Sets the override subdirectory.
    #[must_use]
    pub fn with_override_dir(mut self, dir: impl Into<String>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    /// Sets the directory list capacity.
    #[must_use]
    pub fn with_max_dirs(mut self, max_dirs: usize) -> Self {
        self.max_dirs = max_dirs;
        self
    }

    /// Uses an explicit per-user configuration file.
    #[must_use]
    pub fn with_user_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.load.user_config_file = Some(path.into());
        self
    }

    /// Uses a different system configuration file.
    #[must_use]
    pub fn with_system_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.load.system_config_file = path.into();
        self
    }

    /// Tolerates a missing system configuration file.
    #[must_use]
    pub fn with_optional_system_config(mut self, optional: bool) -> Self {
        self.load.optional_system_config = optional;
        self
    }
}

/// Resolves manual page search paths.
///
/// The configuration is read lazily by [`ManpathResolver::manpath`] and
/// [`ManpathResolver::default_manpath`], or explicitly by
/// [`ManpathResolver::load`]. The remaining queries answer from whatever is
/// loaded, so call `load` first when using them on their own.
///
/// # Examples
///
/// ```
/// use manpath::config::Environment;
/// use manpath::{LogLevel, Logger, ManpathResolver, ResolverOptions};
///
/// let env = Environment {
///     manpath: Some("/nonexistent/man".to_string()),
///     disable_system_config: true,
///     ..Environment::default()
/// };
/// let mut resolver =
///     ManpathResolver::new(ResolverOptions::new(), env, Logger::new(LogLevel::Quiet));
///
/// assert_eq!(resolver.manpath().unwrap(), "/nonexistent/man");
/// assert!(resolver.pathlist("/nonexistent/man").unwrap().is_empty());
/// ```
pub struct ManpathResolver {
    config: Configuration,
    env: Environment,
    logger: Logger,
    options: ResolverOptions,
    expander: Box<dyn PathExpander>,
}

impl fmt::Debug for ManpathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManpathResolver")
            .field("config", &self.config)
            .field("env", &self.env)
            .field("logger", &self.logger)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ManpathResolver {
    /// Creates a resolver with wildcard expansion through [`GlobExpander`].
    #[must_use]
    pub fn new(options: ResolverOptions, env: Environment, logger: Logger) -> Self {
        Self {
            config: Configuration::new(),
            env,
            logger,
            options,
            expander: Box::new(GlobExpander),
        }
    }

    /// Replaces the wildcard expander.
    #[must_use]
    pub fn with_expander(mut self, expander: impl PathExpander + 'static) -> Self {
        self.expander = Box::new(expander);
        self
    }

    /// Reads the configuration files, once.
    ///
    /// # Errors
    ///
    /// Propagates [`Configuration::load`] failures.
    pub fn load(&mut self) -> Result<()> {
        self.config
            .load(&self.options.load, &self.env, &self.logger)
    }

    /// Forgets the loaded configuration.
    pub fn reset(&mut self) {
        self.config.reset();
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Width and cache settings from the configuration.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.config.settings()
    }

    /// The environment snapshot.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// The options this resolver was created with.
    #[must_use]
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The manpath, honoring `$MANPATH`.
    ///
    /// `$MANPATH` replaces the configured path, except that an empty
    /// element (leading, trailing, or a `::`) stands for it:
    ///
    /// | `$MANPATH`   | result                       |
    /// |--------------|------------------------------|
    /// | unset, empty | default                      |
    /// | `:a`         | default, `a`                 |
    /// | `a:`         | `a`, default                 |
    /// | `a::b`       | `a`, default, `b`            |
    /// | `a`          | `a`                          |
    ///
    /// Explicit parts are system-augmented; the default is augmented by
    /// [`ManpathResolver::default_manpath`].
    ///
    /// # Errors
    ///
    /// Returns configuration errors from loading, and
    /// [`crate::Error::TooManyDirectories`] from assembling the default.
    pub fn manpath(&mut self) -> Result<String> {
        self.load()?;

        let Some(manpath) = self.env.manpath_override().map(str::to_string) else {
            return self.default_manpath();
        };
        let config_file = self.options.load.system_config_file.display().to_string();

        if let Some(rest) = manpath.strip_prefix(':') {
            self.logger
                .warn(&format!("$MANPATH set, prepending {config_file}"));
            let explicit = self.system_manpath(None, rest);
            let default = self.default_manpath()?;
            return Ok(join_pieces(&[&default, &explicit]));
        }

        if let Some(rest) = manpath.strip_suffix(':') {
            self.logger
                .warn(&format!("$MANPATH set, appending {config_file}"));
            let explicit = self.system_manpath(None, rest);
            let default = self.default_manpath()?;
            return Ok(join_pieces(&[&explicit, &default]));
        }

        if let Some((before, after)) = manpath.split_once("::") {
            self.logger
                .warn(&format!("$MANPATH set, inserting {config_file}"));
            let first = self.system_manpath(None, before);
            let default = self.default_manpath()?;
            let second = self.system_manpath(None, after);
            return Ok(join_pieces(&[&first, &default, &second]));
        }

        self.logger
            .warn(&format!("$MANPATH set, ignoring {config_file}"));
        Ok(self.system_manpath(None, &manpath))
    }

    /// The manpath derived from `$PATH` and the configuration, ignoring
    /// `$MANPATH`.
    ///
    /// Without `$PATH` (or with path lookup disabled) only the mandatory
    /// directories are used.
    ///
    /// # Errors
    ///
    /// Returns configuration errors from loading, and
    /// [`crate::Error::TooManyDirectories`].
    pub fn default_manpath(&mut self) -> Result<String> {
        self.load()?;

        let manpath = match self.env.path.as_deref() {
            None => {
                self.logger.warn("$PATH not set");
                self.mandatory_manpath()
            }
            Some(_) if self.env.disable_path => self.mandatory_manpath(),
            Some("") => {
                self.logger.warn("empty $PATH");
                self.mandatory_manpath()
            }
            Some(path) => self.manpath_from_path(path, true)?,
        };

        Ok(self.system_manpath(None, &manpath))
    }

    /// Every existing `MANDATORY_MANPATH` directory, wildcard-expanded.
    ///
    /// Falls back to `/usr/man` when none exists.
    #[must_use]
    pub fn mandatory_manpath(&self) -> String {
        let mut result = SearchPath::new();
        for record in self.config.store().in_category(Category::Mandatory) {
            for dir in self.expander.expand(record.key()) {
                match DirStatus::probe(&dir) {
                    DirStatus::Directory => result.append(&dir),
                    DirStatus::NotDirectory => {
                        self.logger.warn(&format!("{dir} isn't a directory"));
                    }
                    DirStatus::Unreadable(std::io::ErrorKind::NotFound) => {
                        self.logger
                            .warn(&format!("mandatory directory {dir} doesn't exist"));
                    }
                    DirStatus::Unreadable(kind) => log::debug!("can't stat {dir}: {kind}"),
                }
            }
        }
        result
            .into_option()
            .unwrap_or_else(|| FALLBACK_MANPATH.to_string())
    }

    /// Guesses manual page directories from a `$PATH`-style string.
    ///
    /// Each element mapped by `MANPATH_MAP` contributes its mandirs, in
    /// configuration order. An unmapped element `d` contributes the first
    /// directory among `parent(d)/man`, `d/man`, `parent(d)/share/man` and
    /// `d/share/man`. Empty and `.` elements are skipped. The mandatory
    /// directories follow when `include_mandatory` is set. With an override
    /// directory configured, `dir/override` precedes every `dir`.
    ///
    /// Returns an empty string when nothing qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TooManyDirectories`] when more than
    /// `max_dirs` directories qualify.
    pub fn manpath_from_path(&self, path: &str, include_mandatory: bool) -> Result<String> {
        let store = self.config.store();
        let mut list = PathList::with_capacity_limit(self.options.max_dirs);

        for element in path.split(':').filter(|e| !e.is_empty() && *e != ".") {
            log::debug!("path directory {element}");

            let mut mapped = store.matching(element, Category::ManpathMap).peekable();
            if mapped.peek().is_some() {
                log::debug!("{element} is in the config file");
                for record in mapped {
                    self.add_with_override(&mut list, record.content())?;
                }
            } else if let Some(mandir) = sibling_mandir(element) {
                log::debug!("{element} is not in the config file but has {mandir}");
                self.add_with_override(&mut list, &mandir)?;
            } else {
                log::debug!("{element} is not in the config file and has no man subdirectory");
            }
        }

        if include_mandatory {
            log::debug!("adding mandatory man directories");
            for record in store.in_category(Category::Mandatory) {
                self.add_with_override(&mut list, record.key())?;
            }
        }

        Ok(list.join())
    }

    fn add_with_override(&self, list: &mut PathList, dir: &str) -> Result<()> {
        if let Some(override_dir) = self.options.override_dir.as_deref() {
            list.push_unique(&format!("{dir}/{override_dir}"), self.expander.as_ref(), &self.logger)?;
        }
        list.push_unique(dir, self.expander.as_ref(), &self.logger)
    }

    /// Turns a manpath into the final, de-duplicated directory list.
    ///
    /// # Errors
    ///
    /// See [`PathList::build`].
    pub fn pathlist(&self, paths: &str) -> Result<PathList> {
        PathList::build(paths, self.expander.as_ref(), &self.logger, self.options.max_dirs)
    }

    /// Expands `paths` for a colon-separated locale preference list.
    #[must_use]
    pub fn locale_manpath(&self, paths: &str, locales: &str) -> String {
        expand_for_locales(paths, locales)
    }

    /// Augments `paths` for alternate systems.
    ///
    /// `systems` falls back to the configured systems, then to `$SYSTEM`.
    #[must_use]
    pub fn system_manpath(&self, systems: Option<&str>, paths: &str) -> String {
        let systems = systems
            .or(self.options.systems.as_deref())
            .or_else(|| self.env.systems());
        augment_for_systems(systems, paths, &self.logger)
    }

    /// The configured section search order.
    ///
    /// User `SECTION` lines replace the system ones entirely.
    #[must_use]
    pub fn sections(&self) -> Vec<String> {
        self.config.store().category_values(Category::Section)
    }

    /// The value of a `DEFINE`.
    ///
    /// With `allow_user`, a user definition wins over a system one;
    /// without it only system definitions are consulted.
    #[must_use]
    pub fn definition(&self, name: &str, allow_user: bool) -> Option<&str> {
        let store = self.config.store();
        if allow_user {
            if let Some(value) = store.lookup_first(name, Category::DefineUser) {
                return Some(value);
            }
        }
        store.lookup_first(name, Category::Define)
    }

    /// See [`catpath::catpath`].
    #[must_use]
    pub fn catpath(&self, name: &str, scope: CatScope) -> Option<String> {
        catpath::catpath(self.config.store(), name, scope)
    }

    /// See [`catpath::is_global_mandir`].
    #[must_use]
    pub fn is_global_mandir(&self, dir: &str) -> bool {
        catpath::is_global_mandir(self.config.store(), dir)
    }

    /// See [`catpath::cat_manpath`].
    #[must_use]
    pub fn cat_manpath(&self, paths: &str) -> String {
        catpath::cat_manpath(self.config.store(), paths)
    }

    /// See [`catpath::mandb_manpath`].
    #[must_use]
    pub fn mandb_manpath(&self) -> Option<String> {
        catpath::mandb_manpath(self.config.store())
    }
}

/// The first `man` directory next to or below a `bin`-style directory.
fn sibling_mandir(dir: &str) -> Option<String> {
    let parent = dir.rfind('/').map(|i| &dir[..i]);
    let candidates = [
        parent.map(|p| format!("{p}/man")),
        Some(format!("{dir}/man")),
        parent.map(|p| format!("{p}/share/man")),
        Some(format!("{dir}/share/man")),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| DirStatus::probe(candidate).is_directory())
}

fn join_pieces(pieces: &[&str]) -> String {
    pieces
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":")
}
