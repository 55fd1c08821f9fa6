// src/watch/file_set.rs

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::config::WatchConfig;
use crate::fs::FileSystem;

/// Builds the set of files currently in scope for watching.
///
/// Relative entries in the configuration are resolved against `root` (the
/// host's working directory). Missing entries and unreadable directories are
/// logged and skipped; building the set never fails.
pub struct FileSetBuilder<'a> {
    root: &'a Path,
    config: &'a WatchConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> FileSetBuilder<'a> {
    pub fn new(root: &'a Path, config: &'a WatchConfig, fs: &'a dyn FileSystem) -> Self {
        Self { root, config, fs }
    }

    pub fn build(&self) -> BTreeSet<PathBuf> {
        let mut files = BTreeSet::new();

        for rel in &self.config.directories {
            let dir = self.root.join(rel);
            if !self.fs.is_dir(&dir) {
                error!(path = ?dir, "Directory not found. Skipping");
                continue;
            }
            self.collect_directory(dir, &mut files);
        }

        for rel in &self.config.files {
            let file = self.root.join(rel);
            if !self.fs.is_file(&file) {
                error!(path = ?file, "File not found. Skipping");
                continue;
            }
            files.insert(file);
        }

        debug!(count = files.len(), "built watch file set");
        files
    }

    /// Breadth-first walk below `start`.
    ///
    /// A directory that cannot be listed contributes nothing (neither files
    /// nor subdirectories); the walk carries on with the rest of the queue.
    fn collect_directory(&self, start: PathBuf, out: &mut BTreeSet<PathBuf>) {
        let mut queue = VecDeque::from([start]);

        while let Some(dir) = queue.pop_front() {
            let mut entries = match self.fs.read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    error!(
                        path = ?dir,
                        error = %format!("{err:#}"),
                        "Error while building file watch list"
                    );
                    continue;
                }
            };
            entries.sort();

            for entry in entries {
                if self.fs.is_dir(&entry) {
                    queue.push_back(entry);
                } else if self.fs.is_file(&entry) && self.config.pattern.matches(&entry) {
                    out.insert(entry);
                }
            }
        }
    }
}
