//! Command to check whether a directory is a system-wide manual directory.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Check whether a directory lies under a system `MANDB_MAP` directory.
#[derive(Args)]
pub struct IsGlobalCommand {
    /// Directory to check
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Invert the check (fail if the directory is global)
    #[arg(long)]
    pub not: bool,
}

impl IsGlobalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let is_global = resolver.is_global_mandir(&self.dir);

        if is_global != self.not {
            Ok(())
        } else if self.not {
            Err(CliError::SemanticFailure(format!(
                "{} is a global manual page directory",
                self.dir
            )))
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not a global manual page directory",
                self.dir
            )))
        }
    }
}
