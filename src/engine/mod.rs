// src/engine/mod.rs

//! Polling engine for stylewatch.
//!
//! - [`scheduler`] owns the timer loop, the single-flight guard and the
//!   fingerprint table (`StyleWatcher`).
//! - [`cycle`] runs one scan: enumerate, hash, classify, compile, record.

pub mod cycle;
pub mod scheduler;

pub use cycle::CycleReport;
pub use scheduler::{StyleWatcher, TickOutcome};
