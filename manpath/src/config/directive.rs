//! Parsing of individual configuration-file lines.
//!
//! The vocabulary is fixed:
//!
//! ```text
//! MANDATORY_MANPATH  <mandir>
//! MANPATH_MAP        <bindir> <mandir>
//! MANDB_MAP          <mandir> [<catdir> | FSSTND]
//! DEFINE             <name> [<value ...>]
//! SECTION[S]         <section> ...
//! MINCATWIDTH | MAXCATWIDTH | CATWIDTH <int>
//! NOCACHE
//! NO<anything>       (ignored)
//! ```

use thiserror::Error;

/// Where a `MANDB_MAP` sends its cat pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatdirSpec {
    /// No catdir given: cat pages live beside the man pages.
    SameAsMandir,
    /// `FSSTND`: derive the catdir from the legacy single-tree layout.
    Fsstnd,
    /// An explicit cache directory.
    Dir(String),
}

/// One recognised configuration directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `NOCACHE`.
    NoCache,
    /// `MANDATORY_MANPATH`.
    Mandatory {
        /// Directory (may contain wildcards).
        mandir: String,
    },
    /// `MANPATH_MAP`.
    ManpathMap {
        /// Directory found in `$PATH`.
        bindir: String,
        /// Manual page directory it maps to.
        mandir: String,
    },
    /// `MANDB_MAP`.
    MandbMap {
        /// Manual page hierarchy.
        mandir: String,
        /// Its cache directory.
        catdir: CatdirSpec,
    },
    /// `DEFINE`.
    Define {
        /// Definition name.
        name: String,
        /// Definition value, empty when omitted.
        value: String,
    },
    /// `SECTION` / `SECTIONS`.
    Sections(Vec<String>),
    /// `MINCATWIDTH`.
    MinCatWidth(i32),
    /// `MAXCATWIDTH`.
    MaxCatWidth(i32),
    /// `CATWIDTH`.
    CatWidth(i32),
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// The first word is not a known directive.
    #[error("can't parse directory list `{0}'")]
    Unknown(String),

    /// A directive is missing a required argument.
    #[error("{directive} requires {expected}")]
    MissingArgument {
        /// The directive keyword.
        directive: &'static str,
        /// Description of the missing argument(s).
        expected: &'static str,
    },

    /// A width directive did not carry an integer.
    #[error("{directive} expects an integer, got `{value}'")]
    InvalidNumber {
        /// The directive keyword.
        directive: &'static str,
        /// The offending value.
        value: String,
    },
}

impl Directive {
    /// Parses one configuration line.
    ///
    /// Blank lines, comments and ignored `NO*` toggles yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectiveError`] when the line is not a known directive or
    /// its arguments are missing or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use manpath::config::{CatdirSpec, Directive};
    ///
    /// let d = Directive::parse("MANDB_MAP /usr/share/man /var/cache/man").unwrap();
    /// assert_eq!(
    ///     d,
    ///     Some(Directive::MandbMap {
    ///         mandir: "/usr/share/man".into(),
    ///         catdir: CatdirSpec::Dir("/var/cache/man".into()),
    ///     })
    /// );
    /// assert_eq!(Directive::parse("# comment").unwrap(), None);
    /// assert!(Directive::parse("FROBNICATE yes").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, DirectiveError> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with("NOCACHE") {
            return Ok(Some(Self::NoCache));
        }
        if line.starts_with("NO") {
            return Ok(None);
        }

        let (keyword, rest) = split_word(line);
        let mut args = rest.split_whitespace();

        let directive = match keyword {
            "MANBIN" => return Ok(None),
            "MANDATORY_MANPATH" => {
                let mandir = args.next().ok_or(DirectiveError::MissingArgument {
                    directive: "MANDATORY_MANPATH",
                    expected: "a directory",
                })?;
                Self::Mandatory {
                    mandir: mandir.to_string(),
                }
            }
            "MANPATH_MAP" => match (args.next(), args.next()) {
                (Some(bindir), Some(mandir)) => Self::ManpathMap {
                    bindir: bindir.to_string(),
                    mandir: mandir.to_string(),
                },
                _ => {
                    return Err(DirectiveError::MissingArgument {
                        directive: "MANPATH_MAP",
                        expected: "a path and a manual directory",
                    })
                }
            },
            "MANDB_MAP" => {
                let mandir = args.next().ok_or(DirectiveError::MissingArgument {
                    directive: "MANDB_MAP",
                    expected: "a manual directory",
                })?;
                let catdir = match args.next() {
                    None => CatdirSpec::SameAsMandir,
                    Some("FSSTND") => CatdirSpec::Fsstnd,
                    Some(dir) => CatdirSpec::Dir(dir.to_string()),
                };
                Self::MandbMap {
                    mandir: mandir.to_string(),
                    catdir,
                }
            }
            "DEFINE" => {
                let (name, value) = split_word(rest.trim_start());
                if name.is_empty() {
                    return Err(DirectiveError::MissingArgument {
                        directive: "DEFINE",
                        expected: "a name",
                    });
                }
                Self::Define {
                    name: name.to_string(),
                    value: value.trim_start().to_string(),
                }
            }
            "SECTION" | "SECTIONS" => {
                let sections: Vec<String> = args.map(str::to_string).collect();
                if sections.is_empty() {
                    return Err(DirectiveError::MissingArgument {
                        directive: "SECTION",
                        expected: "at least one section",
                    });
                }
                Self::Sections(sections)
            }
            "MINCATWIDTH" => Self::MinCatWidth(parse_width("MINCATWIDTH", args.next())?),
            "MAXCATWIDTH" => Self::MaxCatWidth(parse_width("MAXCATWIDTH", args.next())?),
            "CATWIDTH" => Self::CatWidth(parse_width("CATWIDTH", args.next())?),
            _ => return Err(DirectiveError::Unknown(line.trim_end().to_string())),
        };

        Ok(Some(directive))
    }
}

/// Splits off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], &s[pos..]),
        None => (s, ""),
    }
}

fn parse_width(directive: &'static str, value: Option<&str>) -> Result<i32, DirectiveError> {
    let value = value.ok_or(DirectiveError::MissingArgument {
        directive,
        expected: "an integer",
    })?;
    value.parse().map_err(|_| DirectiveError::InvalidNumber {
        directive,
        value: value.to_string(),
    })
}
