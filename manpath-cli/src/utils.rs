//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared by every command: the global
//! options, resolver construction, and output formats.

use crate::error::CliError;
use clap::ValueEnum;
use manpath::config::Environment;
use manpath::{init_logger, Logger, ManpathResolver, ResolverOptions};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print debugging information.
    pub verbose: bool,

    /// Suppress warnings.
    pub quiet: bool,

    /// Alternate systems.
    pub systems: Option<String>,

    /// Locales to expand the manpath for.
    pub locales: Option<String>,

    /// Explicit user configuration file.
    pub config_file: Option<PathBuf>,

    /// Explicit system configuration file.
    pub system_config_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// The logger selected by `--debug`, `--quiet` and `MANPATH_LOG_MODE`.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }

    /// Resolver options derived from the command line.
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::new();
        if let Some(systems) = &self.systems {
            options = options.with_systems(systems.clone());
        }
        if let Some(file) = &self.config_file {
            options = options.with_user_config_file(file.clone());
        }
        if let Some(file) = &self.system_config_file {
            options = options.with_system_config_file(file.clone());
        }
        options
    }
}

/// Creates a resolver over the process environment and loads its configuration.
pub fn load_resolver(global: &GlobalOptions) -> Result<ManpathResolver, CliError> {
    let mut resolver = ManpathResolver::new(
        global.resolver_options(),
        Environment::from_process(),
        global.logger(),
    );
    resolver.load()?;
    Ok(resolver)
}

/// The manpath, expanded for `--locales` when given.
pub fn resolve_manpath(
    resolver: &mut ManpathResolver,
    global: &GlobalOptions,
) -> Result<String, CliError> {
    let manpath = resolver.manpath()?;
    Ok(match global.locales.as_deref() {
        Some(locales) => resolver.locale_manpath(&manpath, locales),
        None => manpath,
    })
}

/// Output format for listing commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Text,
    /// JSON
    Json,
}
