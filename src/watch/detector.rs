// src/watch/detector.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::watch::hash::Fingerprint;

/// Classification of a file relative to the previous scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Never seen by this process before.
    New,
    /// Seen before with a different fingerprint.
    Changed,
    /// Seen before with the same fingerprint.
    Unchanged,
}

/// Memo of the last fingerprint observed for every file.
///
/// Entries are only ever inserted or overwritten. A file that leaves the
/// watch set keeps its entry; it is simply never looked up again.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    fingerprints: HashMap<PathBuf, Fingerprint>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, path: &Path, fingerprint: &str) -> FileStatus {
        match self.fingerprints.get(path) {
            None => FileStatus::New,
            Some(previous) if previous != fingerprint => FileStatus::Changed,
            Some(_) => FileStatus::Unchanged,
        }
    }

    /// Store `fingerprint` as the latest observation for `path`.
    pub fn record(&mut self, path: PathBuf, fingerprint: Fingerprint) {
        self.fingerprints.insert(path, fingerprint);
    }

    pub fn fingerprint(&self, path: &Path) -> Option<&str> {
        self.fingerprints.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
