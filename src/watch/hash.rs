// src/watch/hash.rs

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::trace;

use crate::fs::FileSystem;

/// Lower-case hex digest of a file's full content (blake3, 256 bits).
pub type Fingerprint = String;

/// Compute the fingerprint of a single file.
///
/// Fails if the file cannot be opened or read, e.g. because it was removed
/// between enumeration and hashing.
pub fn compute_file_hash(fs: &dyn FileSystem, path: &Path) -> Result<Fingerprint> {
    let mut hasher = Hasher::new();
    let mut reader = fs
        .open_read(path)
        .with_context(|| format!("opening file for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("reading file for hashing: {:?}", path))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let hash = hasher.finalize().to_hex().to_string();
    trace!(path = ?path, hash = %hash, "computed file hash");
    Ok(hash)
}
