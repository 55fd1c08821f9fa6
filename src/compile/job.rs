// src/compile/job.rs

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::fs::FileSystem;

/// One source/output pair handed to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompileJob {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl CompileJob {
    /// Derive the job for `source`: same directory, extension replaced by
    /// `output_extension` (`styles/site.scss` -> `styles/site.css`).
    pub fn for_source(source: &Path, output_extension: &str) -> Self {
        Self {
            source: source.to_path_buf(),
            output: source.with_extension(output_extension),
        }
    }
}

/// Decide whether a file seen for the first time needs compiling.
///
/// - No output yet: compile.
/// - Output present: compile only if the source was modified strictly after
///   the output.
///
/// If either timestamp cannot be read the file is compiled.
pub fn needs_compile_new(fs: &dyn FileSystem, job: &CompileJob) -> bool {
    if !fs.exists(&job.output) {
        debug!(source = ?job.source, "no compiled output yet");
        return true;
    }

    match (fs.modified(&job.source), fs.modified(&job.output)) {
        (Ok(source_time), Ok(output_time)) => {
            let stale = source_time > output_time;
            if stale {
                debug!(source = ?job.source, "source newer than compiled output");
            }
            stale
        }
        (Err(err), _) | (_, Err(err)) => {
            warn!(
                source = ?job.source,
                error = %format!("{err:#}"),
                "could not compare modification times; compiling"
            );
            true
        }
    }
}
