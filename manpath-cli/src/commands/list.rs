//! List command implementation.
//!
//! This module implements the `list` command, which prints the final search
//! directories: wildcard-expanded, existing, and with symlinked duplicates
//! removed.

use crate::error::CliError;
use crate::utils::{load_resolver, resolve_manpath, GlobalOptions, OutputFormat};
use clap::Args;
use std::io::Write;

/// List the search directories.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = load_resolver(global)?;
        let manpath = resolve_manpath(&mut resolver, global)?;
        let list = resolver.pathlist(&manpath)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Text => {
                for dir in &list {
                    writeln!(handle, "{dir}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &list)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
