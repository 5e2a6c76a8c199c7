//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the host's configuration

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with its own directory tree and configuration files.
///
/// Commands built from it never read `/etc/manpath.config`, the real
/// `$HOME/.manpath`, or the caller's `$MANPATH`/`$SYSTEM`, and path
/// lookup is disabled, so the default manpath is exactly the mandatory
/// directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
    /// System configuration file passed to every command
    pub system_config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty system configuration.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let system_config = root.join("etc").join("manpath.config");
        fs::create_dir_all(root.join("etc")).expect("Failed to create etc dir");
        fs::create_dir_all(root.join("home")).expect("Failed to create home dir");
        fs::write(&system_config, "").expect("Failed to write system config");

        Self {
            temp_dir,
            root,
            system_config,
        }
    }

    /// Get a command builder with an isolated environment but no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("manpath").expect("Failed to find manpath binary");
        cmd.env_remove("MANPATH")
            .env_remove("SYSTEM")
            .env_remove("MANPATH_LOG_MODE")
            .env_remove("MANPATH_SYSTEM_CONFIG")
            .env_remove("MAN_TEST_DISABLE_SYSTEM_CONFIG")
            .env("MAN_TEST_DISABLE_PATH", "1")
            .env("HOME", self.root.join("home"));
        cmd
    }

    /// Get a command builder reading this environment's system configuration.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--system-config-file").arg(&self.system_config);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create a directory under the test environment, returning its path.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.root.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_str().expect("Non-UTF-8 temp path").to_string()
    }

    /// Replace the system configuration file.
    pub fn system_config(&self, contents: &str) {
        fs::write(&self.system_config, contents).expect("Failed to write system config");
    }

    /// Write `$HOME/.manpath`.
    pub fn user_config(&self, contents: &str) -> PathBuf {
        let path = self.root.join("home").join(".manpath");
        fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run with `args` and return stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run manpath");
        assert!(
            output.status.success(),
            "manpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
