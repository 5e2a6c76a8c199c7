//! Environment inputs for manpath resolution.
//!
//! All environment variables the engine reads are captured once into an
//! [`Environment`] value. Library code never calls `std::env::var` itself,
//! so tests can build an `Environment` field by field.

use std::env;
use std::path::PathBuf;

/// Override search path.
pub const MANPATH_ENV: &str = "MANPATH";
/// Executable search path used to guess manual directories.
pub const PATH_ENV: &str = "PATH";
/// Comma- or colon-separated list of alternate system names.
pub const SYSTEM_ENV: &str = "SYSTEM";
/// Home directory, locates the user configuration file.
pub const HOME_ENV: &str = "HOME";
/// Test-only: when set, `$PATH` is ignored.
pub const DISABLE_PATH_ENV: &str = "MAN_TEST_DISABLE_PATH";
/// Test-only: when set, the system configuration file is not read.
pub const DISABLE_SYSTEM_CONFIG_ENV: &str = "MAN_TEST_DISABLE_SYSTEM_CONFIG";

/// Snapshot of the environment variables the engine consults.
///
/// # Examples
///
/// ```
/// use manpath::config::Environment;
///
/// let env = Environment {
///     path: Some("/usr/bin:/bin".to_string()),
///     disable_system_config: true,
///     ..Environment::default()
/// };
/// assert!(env.manpath_override().is_none());
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `$MANPATH`.
    pub manpath: Option<String>,
    /// `$PATH`.
    pub path: Option<String>,
    /// `$SYSTEM`.
    pub system: Option<String>,
    /// `$HOME`.
    pub home: Option<PathBuf>,
    /// `$MAN_TEST_DISABLE_PATH` is set.
    pub disable_path: bool,
    /// `$MAN_TEST_DISABLE_SYSTEM_CONFIG` is set.
    pub disable_system_config: bool,
}

impl Environment {
    /// Captures the current process environment.
    ///
    /// Variables holding invalid Unicode are treated as unset. When `$HOME`
    /// is unset, the `home` crate's lookup is used instead.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            manpath: env::var(MANPATH_ENV).ok(),
            path: env::var(PATH_ENV).ok(),
            system: env::var(SYSTEM_ENV).ok(),
            home: env::var_os(HOME_ENV)
                .map(PathBuf::from)
                .or_else(home::home_dir),
            disable_path: env::var_os(DISABLE_PATH_ENV).is_some(),
            disable_system_config: env::var_os(DISABLE_SYSTEM_CONFIG_ENV).is_some(),
        }
    }

    /// `$MANPATH`, if set and non-empty.
    #[must_use]
    pub fn manpath_override(&self) -> Option<&str> {
        self.manpath.as_deref().filter(|m| !m.is_empty())
    }

    /// `$SYSTEM`, if set and non-empty.
    #[must_use]
    pub fn systems(&self) -> Option<&str> {
        self.system.as_deref().filter(|s| !s.is_empty())
    }

    /// Default location of the per-user configuration file, `$HOME/.manpath`.
    #[must_use]
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(".manpath"))
    }
}
