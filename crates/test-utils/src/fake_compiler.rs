use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;
use stylewatch::compile::{CompileJob, CompileOutcome, Compiler};

/// Lets a test hold a compile "in progress" until it chooses to release it.
#[derive(Debug, Default)]
pub struct CompileGate {
    pub entered: Notify,
    pub release: Notify,
}

/// A fake compiler that:
/// - records every job it was asked to compile
/// - returns a fixed outcome
/// - optionally blocks on a [`CompileGate`] to simulate a slow compile
/// - tracks how many compiles overlapped
#[derive(Clone)]
pub struct FakeCompiler {
    jobs: Arc<Mutex<Vec<CompileJob>>>,
    outcome: CompileOutcome,
    gate: Option<Arc<CompileGate>>,
    active: Arc<AtomicUsize>,
    max_active: Arc<AtomicUsize>,
}

impl FakeCompiler {
    pub fn succeeding() -> Self {
        Self::with_outcome(CompileOutcome::Success)
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::with_outcome(CompileOutcome::Failed {
            exit_code,
            stderr: stderr.to_string(),
        })
    }

    pub fn with_outcome(outcome: CompileOutcome) -> Self {
        Self {
            jobs: Arc::new(Mutex::new(Vec::new())),
            outcome,
            gate: None,
            active: Arc::new(AtomicUsize::new(0)),
            max_active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A succeeding compiler whose every compile waits on the returned gate.
    pub fn gated() -> (Self, Arc<CompileGate>) {
        let gate = Arc::new(CompileGate::default());
        let mut compiler = Self::succeeding();
        compiler.gate = Some(Arc::clone(&gate));
        (compiler, gate)
    }

    pub fn jobs(&self) -> Vec<CompileJob> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn take_jobs(&self) -> Vec<CompileJob> {
        std::mem::take(&mut *self.jobs.lock().unwrap())
    }

    /// Highest number of compiles that were in progress at the same time.
    pub fn max_concurrent(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

impl Compiler for FakeCompiler {
    fn compile<'a>(
        &'a self,
        job: &'a CompileJob,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + 'a>> {
        Box::pin(async move {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);

            self.jobs.lock().unwrap().push(job.clone());

            if let Some(gate) = &self.gate {
                gate.entered.notify_one();
                gate.release.notified().await;
            }

            self.active.fetch_sub(1, Ordering::SeqCst);
            self.outcome.clone()
        })
    }
}
