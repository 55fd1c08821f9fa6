#![allow(dead_code)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use anyhow::{Result, anyhow};
use stylewatch::config::WatchConfig;
use stylewatch::engine::{StyleWatcher, TickOutcome};
use stylewatch::fs::FileSystem;
use stylewatch::fs::mock::MockFileSystem;
use stylewatch_test_utils::fake_compiler::FakeCompiler;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const ROOT: &str = "/proj";

/// Watcher over a mock filesystem rooted at [`ROOT`].
pub fn mock_watcher(
    config: WatchConfig,
    fs: &MockFileSystem,
    compiler: &FakeCompiler,
) -> StyleWatcher {
    StyleWatcher::new(
        Arc::new(config),
        ROOT,
        Arc::new(fs.clone()),
        Arc::new(compiler.clone()),
    )
}

pub fn p(path: &str) -> PathBuf {
    PathBuf::from(path)
}

pub fn expect_started(outcome: TickOutcome) -> JoinHandle<stylewatch::engine::CycleReport> {
    match outcome {
        TickOutcome::Started(handle) => handle,
        TickOutcome::Skipped => panic!("expected the tick to start a cycle"),
    }
}

/// Mock filesystem wrapper whose reads fail for selected paths, as if the
/// file vanished between enumeration and hashing.
#[derive(Debug, Clone)]
pub struct FlakyFileSystem {
    pub inner: MockFileSystem,
    unreadable: Arc<Mutex<Vec<PathBuf>>>,
}

impl FlakyFileSystem {
    pub fn new(inner: MockFileSystem) -> Self {
        Self {
            inner,
            unreadable: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn make_unreadable(&self, path: &str) {
        self.unreadable.lock().unwrap().push(PathBuf::from(path));
    }

    pub fn make_readable(&self, path: &str) {
        self.unreadable.lock().unwrap().retain(|p| p != Path::new(path));
    }
}

impl FileSystem for FlakyFileSystem {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        if self.unreadable.lock().unwrap().iter().any(|p| p == path) {
            return Err(anyhow!("vanished: {:?}", path));
        }
        self.inner.open_read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        self.inner.modified(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.inner.read_dir(path)
    }
}

/// Mock filesystem wrapper that fires a cancellation token when one path is
/// opened for reading, i.e. after enumeration and while that file is hashed.
#[derive(Debug, Clone)]
pub struct CancelOnRead {
    pub inner: MockFileSystem,
    trigger: PathBuf,
    cancel: CancellationToken,
}

impl CancelOnRead {
    pub fn new(inner: MockFileSystem, trigger: &str, cancel: CancellationToken) -> Self {
        Self {
            inner,
            trigger: PathBuf::from(trigger),
            cancel,
        }
    }
}

impl FileSystem for CancelOnRead {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        if path == self.trigger {
            self.cancel.cancel();
        }
        self.inner.open_read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        self.inner.modified(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.inner.read_dir(path)
    }
}
