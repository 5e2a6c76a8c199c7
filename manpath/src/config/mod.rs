//! Configuration system for manpath.
//!
//! Configuration comes from two line-oriented files, read in this order:
//!
//! 1. The per-user file (`~/.manpath`, or an explicit path)
//! 2. The system file (`/etc/manpath.config`)
//!
//! Each line is parsed into a [`Directive`] and recorded in a
//! [`ConfigStore`], an insertion-ordered list of category-tagged records.
//! `SECTION`, `DEFINE` and `MANDB_MAP` lines from the user file get user
//! categories, so callers can let user settings override system ones (or
//! refuse to, where that matters).
//!
//! # Examples
//!
//! ```
//! use manpath::config::{Category, Configuration, Scope};
//! use manpath::{LogLevel, Logger};
//! use std::path::Path;
//!
//! let logger = Logger::new(LogLevel::Quiet);
//! let mut config = Configuration::new();
//! config
//!     .load_str("SECTION 1 8\n", Path::new("system"), Scope::System, &logger)
//!     .unwrap();
//! config
//!     .load_str("SECTION 3\n", Path::new("user"), Scope::User, &logger)
//!     .unwrap();
//!
//! assert_eq!(config.store().category_values(Category::Section), vec!["3"]);
//! ```

pub mod directive;
pub mod environment;
pub mod loader;
pub mod store;

pub use directive::{CatdirSpec, Directive, DirectiveError};
pub use environment::Environment;
pub use loader::{ConfigSource, Configuration, LoadOptions, Scope, Settings, SYSTEM_CONFIG_FILE};
pub use store::{Category, ConfigRecord, ConfigStore, Cursor};
