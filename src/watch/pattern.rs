// src/watch/pattern.rs

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobMatcher};

/// Default filename filter for watched directories.
pub const DEFAULT_FILE_PATTERN: &str = "*.scss";

/// Compiled filename filter (e.g. `*.scss`).
///
/// Only the final path component is matched, the same way a directory listing
/// filter works: `*.scss` accepts `styles/site.scss` but a pattern can never
/// select on directory names.
#[derive(Clone)]
pub struct FilePattern {
    source: String,
    matcher: GlobMatcher,
}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FilePattern").field(&self.source).finish()
    }
}

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(Self {
            source: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the file name of `path` matches the pattern.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matcher.is_match(name))
            .unwrap_or(false)
    }
}
