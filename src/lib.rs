// src/lib.rs

pub mod cli;
pub mod compile;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::compile::SassCompiler;
use crate::config::{WatchConfig, resolve_config};
use crate::engine::StyleWatcher;
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::FileSetBuilder;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the real filesystem and compiler backends
/// - the polling watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref().map(Path::new))?;
    let root = std::env::current_dir().context("resolving current working directory")?;

    if args.dry_run {
        print_dry_run(&config, &root, &RealFileSystem);
        return Ok(());
    }

    let watcher = build_watcher(config, root);
    let cancel = CancellationToken::new();

    // Ctrl-C → graceful shutdown.
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            info!("shutdown requested");
            cancel.cancel();
        });
    }

    if args.once {
        if let Some(report) = watcher.scan_once(&cancel).await {
            info!(
                candidates = report.candidates,
                compiled = report.compiled.len(),
                failures = report.compile_failures,
                "single scan complete"
            );
        }
        return Ok(());
    }

    watcher.run(cancel).await;
    Ok(())
}

/// Build a watcher backed by the real filesystem and the configured
/// compiler executable, running from `root`.
pub fn build_watcher(config: WatchConfig, root: PathBuf) -> StyleWatcher {
    let compiler = SassCompiler::new(config.compiler.clone(), root.clone());
    StyleWatcher::new(
        Arc::new(config),
        root,
        Arc::new(RealFileSystem),
        Arc::new(compiler),
    )
}

/// Simple dry-run output: print configuration and the current watch set.
fn print_dry_run(config: &WatchConfig, root: &Path, fs: &dyn FileSystem) {
    println!("stylewatch dry-run");
    println!("  root = {}", root.display());
    println!("  pattern = {}", config.pattern.as_str());
    println!("  polling_interval = {:?}", config.polling_interval);
    println!("  compiler = {}", config.compiler);
    println!("  output_extension = {}", config.output_extension);
    for dir in &config.directories {
        println!("  directory: {}", dir.display());
    }
    for file in &config.files {
        println!("  file: {}", file.display());
    }
    println!();

    let files = FileSetBuilder::new(root, config, fs).build();
    println!("files in scope ({}):", files.len());
    for file in &files {
        println!("  - {}", file.display());
    }

    debug!("dry-run complete (no compilation)");
}
