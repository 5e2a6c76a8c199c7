//! Default action: print the manpath.
//!
//! Runs when `manpath` is invoked without a subcommand.

use crate::error::CliError;
use crate::utils::{load_resolver, resolve_manpath, GlobalOptions};
use manpath::Error as LibError;

/// Print the manpath, the globally mapped manpath, or their catpaths.
pub struct ShowCommand {
    /// Print cache directories instead.
    pub catpath: bool,
    /// Start from every `MANDB_MAP` directory rather than the search path.
    pub global: bool,
}

impl ShowCommand {
    /// Execute the default action.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = load_resolver(global)?;

        let path = if self.global {
            resolver.mandb_manpath().ok_or_else(|| LibError::NoGlobalManpaths {
                path: resolver.options().load.system_config_file.clone(),
            })?
        } else {
            resolve_manpath(&mut resolver, global)?
        };

        let path = if self.catpath {
            resolver.cat_manpath(&path)
        } else {
            path
        };

        println!("{path}");
        Ok(())
    }
}
