//! Search path assembly.
//!
//! # Key Concepts
//!
//! ## Path strings
//!
//! Intermediate results are colon-separated strings, combined with
//! [`path_append`], which drops segments already present without touching
//! the filesystem.
//!
//! ## Path lists
//!
//! The final search list is a [`PathList`]: wildcard-expanded, restricted to
//! existing directories, and de-duplicated by resolving symlinks, keeping the
//! first spelling of each physical directory in its original position.
//!
//! ## Expansions
//!
//! [`expand_for_locales`] inserts locale subdirectories ahead of the
//! untranslated hierarchies, and [`augment_for_systems`] swaps each
//! directory for its alternate-system subdirectory.
//!
//! # Examples
//!
//! ```
//! use manpath::path::{path_append, GlobExpander, PathList};
//! use manpath::{LogLevel, Logger};
//!
//! let joined = path_append("/usr/share/man", "/usr/local/man:/usr/share/man");
//! assert_eq!(joined, "/usr/share/man:/usr/local/man");
//!
//! let logger = Logger::new(LogLevel::Quiet);
//! let list = PathList::build("/:/", &GlobExpander, &logger, 8).unwrap();
//! assert_eq!(list.len(), 1);
//! ```

pub mod append;
pub mod list;
pub mod locale;
pub mod probe;
pub mod system;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use append::{path_append, SearchPath};
pub use list::{PathList, DEFAULT_MAX_DIRS};
pub use locale::{expand_for_locale, expand_for_locales};
pub use probe::{canonical_form, DirStatus, GlobExpander, PathExpander};
pub use system::{augment_for_systems, NATIVE_SYSTEM};
