//! Command to show a `DEFINE` value.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Show the value of a configuration definition.
#[derive(Args)]
pub struct DefineCommand {
    /// Name of the definition
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Ignore definitions from the user configuration file
    #[arg(long)]
    pub no_user: bool,
}

impl DefineCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        match resolver.definition(&self.name, !self.no_user) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "{} is not defined",
                self.name
            ))),
        }
    }
}
