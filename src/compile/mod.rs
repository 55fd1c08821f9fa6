// src/compile/mod.rs

//! Compiler invocation layer.
//!
//! - [`job`] derives the output path for a source file and holds the policy
//!   for files seen for the first time.
//! - [`backend`] provides the `Compiler` trait the scan cycle calls through.
//! - [`command`] is the production backend that spawns the external
//!   compiler with `tokio::process::Command`.

pub mod backend;
pub mod command;
pub mod job;

pub use backend::{CompileOutcome, Compiler};
pub use command::{COMPILER_ARGS, SassCompiler};
pub use job::{CompileJob, needs_compile_new};
