//! Common test utilities for integration tests.
//!
//! This module provides a fixture for building throwaway manual page
//! hierarchies and configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use manpath::config::Environment;
use manpath::{LogLevel, Logger, ManpathResolver, ResolverOptions};
use tempfile::TempDir;

/// A temporary directory tree with helpers for populating it.
///
/// Paths handed out are canonical, so they compare equal to what
/// symlink-resolving code produces.
pub struct ManTree {
    _dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl ManTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        Self { _dir: dir, root }
    }

    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree, as a string.
    pub fn path(&self, relative: &str) -> String {
        self.root.join(relative).to_str().unwrap().to_string()
    }

    /// Creates a directory (and its parents), returning its path.
    pub fn dir(&self, relative: &str) -> String {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// Creates a file with `contents`, returning its path.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a system configuration file and returns resolver options for it.
    ///
    /// The per-user file points inside the tree and does not exist unless
    /// created with [`ManTree::user_config`].
    pub fn options(&self, system_config: &str) -> ResolverOptions {
        let system = self.file("etc/manpath.config", system_config);
        ResolverOptions::new()
            .with_system_config_file(system)
            .with_user_config_file(self.root.join("home/.manpath"))
    }

    /// Writes the per-user configuration file.
    pub fn user_config(&self, contents: &str) -> PathBuf {
        self.file("home/.manpath", contents)
    }

    /// A quiet resolver over `system_config` and `env`.
    pub fn resolver(&self, system_config: &str, env: Environment) -> ManpathResolver {
        ManpathResolver::new(self.options(system_config), env, quiet())
    }
}

/// A logger that prints nothing.
#[allow(dead_code)]
pub fn quiet() -> Logger {
    Logger::new(LogLevel::Quiet)
}

/// An environment with path lookup disabled and no `$HOME`.
#[allow(dead_code)]
pub fn isolated_env() -> Environment {
    Environment {
        path: Some("/usr/bin:/bin".to_string()),
        disable_path: true,
        ..Environment::default()
    }
}
