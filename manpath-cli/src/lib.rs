//! Library exports for manpath-cli.
//!
//! This module exports the CLI structure for use by documentation
//! generators and tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
