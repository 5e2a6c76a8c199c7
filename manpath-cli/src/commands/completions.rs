//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "manpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Write the completion script to stdout, with an install hint on stderr.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(target) = install_target(self.shell) {
                eprintln!("# manpath completions {} > {target}", self.shell);
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Conventional per-user location of a completion script.
fn install_target(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("~/.local/share/bash-completion/completions/manpath"),
        Shell::Zsh => Some("~/.zsh/completions/_manpath"),
        Shell::Fish => Some("~/.config/fish/completions/manpath.fish"),
        Shell::Elvish => Some("~/.config/elvish/lib/manpath.elv"),
        Shell::PowerShell => Some("$PROFILE"),
        _ => None,
    }
}
