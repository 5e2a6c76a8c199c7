//! Build script for manpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! The command structure is rebuilt here by hand, since build scripts cannot
//! depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("manpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Determine the search path for manual pages")
        .long_about(
            "Print the manual page search path worked out from $MANPATH, $PATH and \
             the manpath configuration files",
        )
        .arg(
            Arg::new("catpath")
                .short('c')
                .long("catpath")
                .help("Show the relative catpaths instead of the manpath")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("global")
                .short('g')
                .long("global")
                .help("Show the manpath of all globally mapped directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("systems")
                .short('m')
                .long("systems")
                .help("Use manual pages from other systems")
                .value_name("SYSTEM[,...]")
                .global(true),
        )
        .arg(
            Arg::new("locales")
                .long("locales")
                .help("Add locale subdirectories for a colon-separated locale list")
                .value_name("LOCALES")
                .global(true),
        )
        .arg(
            Arg::new("config-file")
                .short('C')
                .long("config-file")
                .help("Use this user configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("system-config-file")
                .long("system-config-file")
                .help("Use this system configuration file")
                .value_name("FILE")
                .global(true)
                .env("MANPATH_SYSTEM_CONFIG"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .visible_alias("verbose")
                .help("Print debugging information")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress warnings")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List the search directories")
                .long_about("Print the final, de-duplicated list of manual page directories"),
            Command::new("sections")
                .about("Show the section search order")
                .long_about("Print the configured manual sections in search order"),
            Command::new("define")
                .about("Show a configuration definition")
                .long_about("Print the value of a DEFINE from the configuration files"),
            Command::new("catpath")
                .about("Show the cache path for a manual page directory")
                .long_about("Print the formatted-page cache path derived from MANDB_MAP"),
            Command::new("is-global")
                .about("Check whether a directory is a global manual directory")
                .long_about("Exit successfully if the directory lies under a system MANDB_MAP"),
            Command::new("show-config")
                .about("Show the loaded configuration")
                .long_about("Print the configuration records, settings and source files"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("manpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
