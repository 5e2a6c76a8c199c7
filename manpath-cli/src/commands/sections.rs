//! Command to show the section search order.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Show the configured section search order.
#[derive(Args)]
pub struct SectionsCommand {}

impl SectionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        for section in resolver.sections() {
            println!("{section}");
        }
        Ok(())
    }
}
