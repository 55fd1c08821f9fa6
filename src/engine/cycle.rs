// src/engine/cycle.rs

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::compile::{CompileJob, CompileOutcome, Compiler, needs_compile_new};
use crate::config::WatchConfig;
use crate::fs::FileSystem;
use crate::watch::{ChangeDetector, FileSetBuilder, FileStatus, compute_file_hash};

/// Summary of one scan cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Files in the watch set when the cycle started.
    pub candidates: usize,
    pub new: usize,
    pub changed: usize,
    pub unchanged: usize,
    /// Files that could not be hashed and were skipped.
    pub hash_failures: usize,
    /// Jobs handed to the compiler, in the order they ran.
    pub compiled: Vec<CompileJob>,
    pub compile_failures: usize,
    /// True if cancellation stopped the cycle before all files were handled.
    pub cancelled: bool,
}

/// Everything a cycle reads. The detector is passed separately because it is
/// the only state a cycle writes.
pub(crate) struct CycleContext<'a> {
    pub root: &'a Path,
    pub config: &'a WatchConfig,
    pub fs: &'a dyn FileSystem,
    pub compiler: &'a dyn Compiler,
}

/// Run one scan cycle to completion or until `cancel` fires.
///
/// Per-file failures are logged and counted; nothing here aborts the cycle.
/// A file's fingerprint is recorded once its handler has finished, whatever
/// the compiler reported, so a failing file is retried only after its
/// content changes again.
pub(crate) async fn run_cycle(
    ctx: CycleContext<'_>,
    detector: &mut ChangeDetector,
    cancel: &CancellationToken,
) -> CycleReport {
    let files = FileSetBuilder::new(ctx.root, ctx.config, ctx.fs).build();
    let mut report = CycleReport {
        candidates: files.len(),
        ..CycleReport::default()
    };

    for path in files {
        if cancel.is_cancelled() {
            report.cancelled = true;
            break;
        }

        let fingerprint = match compute_file_hash(ctx.fs, &path) {
            Ok(fingerprint) => fingerprint,
            Err(err) => {
                warn!(
                    path = ?path,
                    error = %format!("{err:#}"),
                    "could not hash file; skipping it this cycle"
                );
                report.hash_failures += 1;
                continue;
            }
        };

        let job = CompileJob::for_source(&path, &ctx.config.output_extension);
        let compile = match detector.classify(&path, &fingerprint) {
            FileStatus::Unchanged => {
                report.unchanged += 1;
                continue;
            }
            FileStatus::Changed => {
                report.changed += 1;
                debug!(path = ?path, "Detected file change");
                true
            }
            FileStatus::New => {
                report.new += 1;
                debug!(path = ?path, "Detected new file");
                needs_compile_new(ctx.fs, &job)
            }
        };

        if compile {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            let outcome = ctx.compiler.compile(&job).await;
            if !outcome.is_success() {
                report.compile_failures += 1;
                if let CompileOutcome::Failed { exit_code, .. } = outcome {
                    debug!(path = ?path, exit_code, "compile failed; fingerprint still recorded");
                }
            }
            report.compiled.push(job);
        }

        detector.record(path, fingerprint);
    }

    if report.compiled.is_empty() {
        debug!(?report, "scan cycle finished");
    } else {
        info!(
            candidates = report.candidates,
            compiled = report.compiled.len(),
            failures = report.compile_failures,
            cancelled = report.cancelled,
            "scan cycle finished"
        );
    }

    report
}
