//! SHA1 fingerprints of extracted files.

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::path::Path;

/// Compute the SHA1 of a file's full content as 40 lowercase hex digits.
///
/// The file is read entirely into memory before hashing.
pub async fn sha1_hex(path: &Path) -> Result<String> {
    let buffer = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {} for hashing", path.display()))?;
    Ok(sha1_hex_bytes(&buffer))
}

/// SHA1 of an in-memory buffer, formatted like [`sha1_hex`].
pub fn sha1_hex_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
