// src/compile/backend.rs

//! Pluggable compiler backend abstraction.
//!
//! The scan cycle talks to a [`Compiler`] instead of spawning processes
//! directly. Production uses [`super::command::SassCompiler`]; tests provide
//! a recording fake.

use std::future::Future;
use std::pin::Pin;

use crate::compile::job::CompileJob;

/// Result of one compiler invocation.
///
/// Compiler failures are values, not errors: the cycle records them and
/// moves on to the next file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Success,
    /// The compiler ran and exited non-zero.
    Failed { exit_code: i32, stderr: String },
    /// The compiler could not be started or awaited.
    LaunchFailed { error: String },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success)
    }
}

/// Trait abstracting how a single compile job is executed.
pub trait Compiler: Send + Sync {
    fn compile<'a>(
        &'a self,
        job: &'a CompileJob,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + 'a>>;
}
