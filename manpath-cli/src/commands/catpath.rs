//! Command to derive the cache path of a manual page directory or file.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::{Args, ValueEnum};
use manpath::CatScope;

/// Show the cache path for a manual page directory.
#[derive(Args)]
pub struct CatpathCommand {
    /// Manual page directory or file
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Which MANDB_MAP records to consult
    #[arg(long, value_enum, default_value = "all")]
    pub scope: ScopeArg,
}

/// Command-line spelling of [`CatScope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScopeArg {
    /// System configuration only
    System,
    /// User configuration only
    User,
    /// Both configuration files
    All,
}

impl From<ScopeArg> for CatScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::System => CatScope::System,
            ScopeArg::User => CatScope::User,
            ScopeArg::All => CatScope::All,
        }
    }
}

impl CatpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        match resolver.catpath(&self.name, self.scope.into()) {
            Some(cat) => {
                println!("{cat}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no cache directory is mapped for {}",
                self.name
            ))),
        }
    }
}
