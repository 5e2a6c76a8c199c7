//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatpathCommand, CompletionsCommand, DefineCommand, IsGlobalCommand, ListCommand,
    SectionsCommand, ShowConfigCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Determine the search path for manual pages.
#[derive(Parser)]
#[command(name = "manpath")]
#[command(
    version,
    about = "Determine the search path for manual pages",
    long_about = None
)]
pub struct Cli {
    /// Show the relative catpaths instead of the manpath
    #[arg(short = 'c', long)]
    pub catpath: bool,

    /// Show the manpath of all globally mapped directories
    #[arg(short = 'g', long)]
    pub global: bool,

    /// Use manual pages from other systems
    #[arg(short = 'm', long, value_name = "SYSTEM[,...]", global = true)]
    pub systems: Option<String>,

    /// Add locale subdirectories for a colon-separated locale list
    #[arg(long, value_name = "LOCALES", global = true)]
    pub locales: Option<String>,

    /// Use this user configuration file
    #[arg(short = 'C', long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Use this system configuration file
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        env = "MANPATH_SYSTEM_CONFIG"
    )]
    pub system_config_file: Option<PathBuf>,

    /// Print debugging information
    #[arg(short = 'd', long = "debug", visible_alias = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the search directories
    List(ListCommand),

    /// Show the section search order
    Sections(SectionsCommand),

    /// Show a configuration definition
    Define(DefineCommand),

    /// Show the cache path for a manual page directory
    Catpath(CatpathCommand),

    /// Check whether a directory is a global manual directory
    IsGlobal(IsGlobalCommand),

    /// Show the loaded configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
