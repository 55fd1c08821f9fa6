// src/engine/scheduler.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::compile::Compiler;
use crate::config::{MAX_POLLING_INTERVAL, WatchConfig};
use crate::engine::cycle::{CycleContext, CycleReport, run_cycle};
use crate::fs::FileSystem;
use crate::watch::ChangeDetector;

/// What a single tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// A new cycle was spawned.
    Started(JoinHandle<CycleReport>),
    /// A cycle was already running; the tick was dropped.
    Skipped,
}

/// Polling watcher: fires a scan cycle every `polling_interval`, at most one
/// at a time.
///
/// The fingerprint table lives behind a `tokio::sync::Mutex`. A tick takes it
/// with `try_lock_owned` and hands the guard to the cycle it spawns, so the
/// lock doubles as the "scan running" flag: while a cycle holds it, further
/// ticks fail to acquire it and return immediately.
#[derive(Clone)]
pub struct StyleWatcher {
    config: Arc<WatchConfig>,
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
    compiler: Arc<dyn Compiler>,
    detector: Arc<Mutex<ChangeDetector>>,
}

impl std::fmt::Debug for StyleWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleWatcher")
            .field("root", &self.root)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StyleWatcher {
    /// `root` is the host working directory: relative watch entries are
    /// resolved against it.
    pub fn new(
        config: Arc<WatchConfig>,
        root: impl Into<PathBuf>,
        fs: Arc<dyn FileSystem>,
        compiler: Arc<dyn Compiler>,
    ) -> Self {
        Self {
            config,
            root: root.into(),
            fs,
            compiler,
            detector: Arc::new(Mutex::new(ChangeDetector::new())),
        }
    }

    /// Shared handle to the fingerprint table, mainly for inspection in tests.
    pub fn detector(&self) -> Arc<Mutex<ChangeDetector>> {
        Arc::clone(&self.detector)
    }

    /// Drive the polling loop until `cancel` fires.
    ///
    /// The first tick happens one interval after start. Ticks never wait for
    /// a running cycle, so a slow cycle does not stretch the schedule. On
    /// cancellation the loop waits for the in-flight cycle (if any) to notice
    /// and stop before returning.
    pub async fn run(&self, cancel: CancellationToken) {
        if cancel.is_cancelled() {
            info!("cancelled before start; file change watcher not started");
            return;
        }

        // Hand-built configs skip validation.
        let period = self
            .config
            .polling_interval
            .clamp(Duration::from_millis(1), MAX_POLLING_INTERVAL);
        if period != self.config.polling_interval {
            warn!(
                configured = ?self.config.polling_interval,
                used = ?period,
                "polling interval out of range; clamped"
            );
        }
        info!(
            interval = ?period,
            root = ?self.root,
            "Sass compiler file change watcher starting"
        );

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut in_flight: Option<JoinHandle<CycleReport>> = None;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if let TickOutcome::Started(handle) = self.tick(&cancel) {
                        in_flight = Some(handle);
                    }
                }
            }
        }

        if let Some(handle) = in_flight {
            if let Err(err) = handle.await {
                warn!(error = %err, "scan cycle task ended abnormally");
            }
        }

        info!("file change watcher stopped");
    }

    /// Spawn [`run`](Self::run) as a background task, for embedding in a
    /// host that has its own main loop.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }

    /// Try to start a cycle without blocking.
    pub fn tick(&self, cancel: &CancellationToken) -> TickOutcome {
        let Some(detector) = self.try_acquire() else {
            return TickOutcome::Skipped;
        };

        let this = self.clone();
        let cancel = cancel.clone();
        TickOutcome::Started(tokio::spawn(async move {
            this.cycle_with(detector, &cancel).await
        }))
    }

    /// Run one cycle inline. Returns `None` if another cycle holds the table.
    pub async fn scan_once(&self, cancel: &CancellationToken) -> Option<CycleReport> {
        let detector = self.try_acquire()?;
        Some(self.cycle_with(detector, cancel).await)
    }

    fn try_acquire(&self) -> Option<OwnedMutexGuard<ChangeDetector>> {
        match Arc::clone(&self.detector).try_lock_owned() {
            Ok(guard) => Some(guard),
            Err(_) => {
                debug!("scan cycle still running; dropping tick");
                None
            }
        }
    }

    async fn cycle_with(
        &self,
        mut detector: OwnedMutexGuard<ChangeDetector>,
        cancel: &CancellationToken,
    ) -> CycleReport {
        let ctx = CycleContext {
            root: &self.root,
            config: &self.config,
            fs: self.fs.as_ref(),
            compiler: self.compiler.as_ref(),
        };
        run_cycle(ctx, &mut detector, cancel).await
    }
}
