// src/watch/mod.rs

//! Change detection.
//!
//! This module is responsible for:
//! - Enumerating the files in scope (`file_set`), filtered by a filename
//!   pattern (`pattern`).
//! - Fingerprinting file content (`hash`).
//! - Remembering fingerprints across scans and classifying each file as new,
//!   changed or unchanged (`detector`).
//!
//! It does **not** run the compiler; see [`crate::compile`].

pub mod detector;
pub mod file_set;
pub mod hash;
pub mod pattern;

pub use detector::{ChangeDetector, FileStatus};
pub use file_set::FileSetBuilder;
pub use hash::{Fingerprint, compute_file_hash};
pub use pattern::{DEFAULT_FILE_PATTERN, FilePattern};
