//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the manpath (the default action)
//! - `list`: List the final search directories
//! - `sections`: Show the section search order
//! - `define`: Show a configuration definition
//! - `catpath`: Derive the cache path of a manual directory
//! - `is_global`: Check for a system-wide manual directory
//! - `show_config`: Dump the loaded configuration
//! - `completions`: Generate shell completion scripts

pub mod catpath;
pub mod completions;
pub mod define;
pub mod is_global;
pub mod list;
pub mod sections;
pub mod show;
pub mod show_config;

pub use catpath::CatpathCommand;
pub use completions::CompletionsCommand;
pub use define::DefineCommand;
pub use is_global::IsGlobalCommand;
pub use list::ListCommand;
pub use sections::SectionsCommand;
pub use show::ShowCommand;
pub use show_config::ShowConfigCommand;
