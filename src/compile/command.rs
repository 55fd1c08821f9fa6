// src/compile/command.rs

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::compile::backend::{CompileOutcome, Compiler};
use crate::compile::job::CompileJob;

/// Fixed arguments passed before the input and output paths.
pub const COMPILER_ARGS: [&str; 3] = ["--style=compressed", "--no-source-map", "--stop-on-error"];

/// Runs the external stylesheet compiler as a subprocess:
///
/// ```text
/// <executable> --style=compressed --no-source-map --stop-on-error <input> <output>
/// ```
#[derive(Debug, Clone)]
pub struct SassCompiler {
    executable: String,
    working_dir: PathBuf,
}

impl SassCompiler {
    pub fn new(executable: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            working_dir: working_dir.into(),
        }
    }

    async fn run(&self, job: &CompileJob) -> CompileOutcome {
        match self.run_inner(job).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let error = format!("{err:#}");
                error!(
                    compiler = %self.executable,
                    source = ?job.source,
                    error = %error,
                    "could not run compiler"
                );
                CompileOutcome::LaunchFailed { error }
            }
        }
    }

    async fn run_inner(&self, job: &CompileJob) -> Result<CompileOutcome> {
        info!(source = ?job.source, output = ?job.output, "compiling stylesheet");

        let output = Command::new(&self.executable)
            .args(COMPILER_ARGS)
            .arg(&job.source)
            .arg(&job.output)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("spawning compiler '{}'", self.executable))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!(source = ?job.source, "stdout: {}", stdout.trim());
        }

        if output.status.success() {
            debug!(source = ?job.source, "compile succeeded");
            return Ok(CompileOutcome::Success);
        }

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!(
            source = ?job.source,
            exit_code,
            "Compile Error, {}",
            stderr
        );
        Ok(CompileOutcome::Failed { exit_code, stderr })
    }
}

impl Compiler for SassCompiler {
    fn compile<'a>(
        &'a self,
        job: &'a CompileJob,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + 'a>> {
        Box::pin(self.run(job))
    }
}
