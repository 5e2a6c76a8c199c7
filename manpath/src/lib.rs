#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # manpath
//!
//! A library for working out where manual pages live.
//!
//! It combines `$MANPATH`, `$PATH`, locale preferences, alternate system
//! names and the `manpath.config` directives into an ordered, de-duplicated
//! list of manual page directories, and maps those directories to their
//! formatted-page caches.
//!
//! ## Core Types
//!
//! - [`ManpathResolver`] and [`ResolverOptions`]: the resolution entry point
//! - [`config::Configuration`] and [`config::ConfigStore`]: loaded directives
//! - [`PathList`]: the final directory list
//! - [`LocaleParts`]: locale identifiers split into their parts
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use manpath::catpath::CatScope;
//! use manpath::config::{Category, Configuration, Scope};
//! use manpath::{LocaleParts, LogLevel, Logger};
//! use std::path::Path;
//!
//! let logger = Logger::new(LogLevel::Quiet);
//! let mut config = Configuration::new();
//! config
//!     .load_str(
//!         "MANDB_MAP /usr/share/man /var/cache/man\n",
//!         Path::new("manpath.config"),
//!         Scope::System,
//!         &logger,
//!     )
//!     .unwrap();
//!
//! let cat = manpath::catpath::catpath(config.store(), "/usr/share/man/man1", CatScope::All);
//! assert_eq!(cat.as_deref(), Some("/var/cache/man/cat1"));
//!
//! let parts = LocaleParts::split("pt_BR.UTF-8");
//! assert_eq!(parts.territory, "BR");
//! ```

pub mod catpath;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use catpath::CatScope;
pub use config::{Configuration, Environment};
pub use error::{Error, Result};
pub use locale::LocaleParts;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathList;
pub use resolver::{ManpathResolver, ResolverOptions};
