//! Main entry point for the manpath CLI.
//!
//! Without a subcommand it prints the manual page search path:
//! - `-c`/`--catpath`: print the cache directories instead
//! - `-g`/`--global`: start from every globally mapped directory
//!
//! Subcommands expose the rest of the configuration queries.

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use commands::ShowCommand;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            e.exit()
        }
        Err(e) => fail(&CliError::from(e)),
    };

    // Route `log` records from the library through the same logger
    let logger = manpath::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        systems: cli.systems,
        locales: cli.locales,
        config_file: cli.config_file,
        system_config_file: cli.system_config_file,
    };

    let result = match cli.command {
        None => ShowCommand {
            catpath: cli.catpath,
            global: cli.global,
        }
        .execute(&global),
        Some(cli::Command::List(cmd)) => cmd.execute(&global),
        Some(cli::Command::Sections(cmd)) => cmd.execute(&global),
        Some(cli::Command::Define(cmd)) => cmd.execute(&global),
        Some(cli::Command::Catpath(cmd)) => cmd.execute(&global),
        Some(cli::Command::IsGlobal(cmd)) => cmd.execute(&global),
        Some(cli::Command::ShowConfig(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => fail(&e),
    }
}

fn fail(e: &CliError) -> ! {
    eprintln!("manpath: {e}");
    std::process::exit(e.exit_code());
}
