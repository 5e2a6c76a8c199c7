//! Syntactic de-duplication of colon-separated path strings.
//!
//! [`path_append`] is the cheap dedup used while intermediate path strings
//! are assembled. It compares segments verbatim and never touches the
//! filesystem; symlink-aware dedup happens once, in
//! [`PathList::build`](crate::path::PathList::build).

/// Appends `candidate` to `existing`, dropping duplicate segments.
///
/// Segments of `candidate` that already appear verbatim as segments of
/// `existing`, and empty segments, are removed before joining with `:`.
/// When `existing` is empty, `candidate` is returned unchanged.
///
/// # Examples
///
/// ```
/// use manpath::path::path_append;
///
/// assert_eq!(path_append("", "/a:/b"), "/a:/b");
/// assert_eq!(path_append("/a:/b", "/b:/c"), "/a:/b:/c");
/// assert_eq!(path_append("/a:/b", "/a:/b"), "/a:/b");
/// assert_eq!(path_append("/usr/man", "/usr/man2"), "/usr/man:/usr/man2");
/// ```
#[must_use]
pub fn path_append(existing: &str, candidate: &str) -> String {
    if existing.is_empty() {
        return candidate.to_string();
    }

    let seen: Vec<&str> = existing.split(':').filter(|s| !s.is_empty()).collect();
    let kept: Vec<&str> = candidate
        .split(':')
        .filter(|segment| !segment.is_empty() && !seen.contains(segment))
        .collect();

    if kept.len() != candidate.split(':').count() {
        log::debug!(
            "{existing}:{candidate} reduced to {existing}{}{}",
            if kept.is_empty() { "" } else { ":" },
            kept.join(":")
        );
    }

    if kept.is_empty() {
        existing.to_string()
    } else {
        format!("{existing}:{}", kept.join(":"))
    }
}

/// Accumulates a colon-separated path with [`path_append`] semantics.
///
/// # Examples
///
/// ```
/// use manpath::path::SearchPath;
///
/// let mut path = SearchPath::new();
/// path.append("/usr/share/man");
/// path.append("/usr/local/man:/usr/share/man");
/// assert_eq!(path.as_str(), "/usr/share/man:/usr/local/man");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    joined: String,
}

impl SearchPath {
    /// Creates an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate`, dropping segments already present.
    pub fn append(&mut self, candidate: &str) {
        self.joined = path_append(&self.joined, candidate);
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    /// The joined path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// The joined path, or `None` if nothing was appended.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        if self.joined.is_empty() {
            None
        } else {
            Some(self.joined)
        }
    }
}

impl From<SearchPath> for String {
    fn from(path: SearchPath) -> Self {
        path.joined
    }
}
