//! Extraction of the parts of a DOCX container.
//!
//! A DOCX is treated as an opaque ZIP archive: entries are walked in the
//! archive's own directory order, optionally filtered to embedded media, and
//! written either in place (relative to the working directory) or flattened
//! into a destination folder.

use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use anyhow::{Context, Result};

use crate::digest::sha1_hex;
use crate::io::LocalFileReader;
use crate::zip::ZipExtractor;

/// Stored-name prefix of the images embedded in a Word document.
pub const IMAGE_PREFIX: &str = "word/media/";

/// Sidecar file collecting digests inside the destination folder.
pub const HASHES_FILE: &str = "hashes.txt";

const HEADER: &str = "\x1b[1;41m ARTIFACTS FOUND: \x1b[m";

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Only extract entries stored under `word/media/`
    pub images_only: bool,
    /// Report the SHA1 of every extracted file
    pub sha1: bool,
    /// Flatten everything into this folder instead of extracting in place
    pub dest_dir: Option<PathBuf>,
}

/// Where an entry lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Directory(PathBuf),
    File(PathBuf),
}

impl Target {
    /// Resolve the output location of a stored name.
    ///
    /// With a destination only the text after the last `/` is kept, so
    /// entries sharing a basename overwrite each other. A directory marker
    /// has an empty basename and resolves to the destination itself.
    pub fn resolve(stored_name: &str, dest_dir: Option<&Path>) -> Self {
        let (path, is_dir) = match dest_dir {
            None => (PathBuf::from(stored_name), stored_name.ends_with('/')),
            Some(dest) => {
                let basename = stored_name.rsplit('/').next().unwrap_or_default();
                if basename.is_empty() {
                    (dest.to_path_buf(), true)
                } else {
                    (dest.join(basename), false)
                }
            }
        };

        if is_dir {
            Target::Directory(path)
        } else {
            Target::File(path)
        }
    }
}

/// Plain string prefix test; `word/media/../x` counts as media.
pub fn is_selected(stored_name: &str, images_only: bool) -> bool {
    !images_only || stored_name.starts_with(IMAGE_PREFIX)
}

/// Extract `docx_path` and report progress on standard output.
///
/// Returns the paths of the files written, in archive order.
pub async fn extract_docx(docx_path: &Path, options: &ExtractOptions) -> Result<Vec<PathBuf>> {
    let mut stdout = std::io::stdout();
    extract_docx_to(docx_path, options, &mut stdout).await
}

/// Same as [`extract_docx`], writing the report to `out`.
///
/// Any error aborts the run; files written so far stay on disk.
pub async fn extract_docx_to<W: Write>(
    docx_path: &Path,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    let reader = Arc::new(LocalFileReader::new(docx_path)?);
    let extractor = ZipExtractor::new(reader);
    let entries = extractor
        .list_files()
        .await
        .with_context(|| format!("cannot read {} as a ZIP archive", docx_path.display()))?;
    info!("{}: {} entries", docx_path.display(), entries.len());

    writeln!(out)?;
    writeln!(out, "{HEADER}")?;
    writeln!(out)?;

    let dest_dir = options.dest_dir.as_deref();
    let mut extracted = Vec::new();

    for entry in &entries {
        if !is_selected(&entry.file_name, options.images_only) {
            debug!("skipping {}", entry.file_name);
            continue;
        }

        let path = match Target::resolve(&entry.file_name, dest_dir) {
            Target::Directory(dir) => {
                fs::create_dir_all(&dir)
                    .await
                    .with_context(|| format!("cannot create directory {}", dir.display()))?;
                debug!("created directory {}", dir.display());
                continue;
            }
            Target::File(path) => path,
        };

        extractor.extract_to_file(entry, &path).await?;
        extracted.push(path.clone());

        if options.sha1 {
            let hex = sha1_hex(&path).await?;
            writeln!(out, "SHA1: {}\t{}", hex, path.display())?;
            if let Some(dest) = dest_dir {
                append_hash(&dest.join(HASHES_FILE), &hex, &path).await?;
            }
        }
    }

    if let Some(dest) = dest_dir {
        writeln!(out)?;
        writeln!(
            out,
            "All artifacts have been written to the folder: {}",
            dest.display()
        )?;
    }

    Ok(extracted)
}

/// Append one `<hex> <path>` line, reopening the sidecar every time.
async fn append_hash(sidecar: &Path, hex: &str, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(sidecar)
        .await
        .with_context(|| format!("cannot open {}", sidecar.display()))?;
    file.write_all(format!("{} {}\n", hex, path.display()).as_bytes())
        .await?;
    file.flush().await?;
    Ok(())
}
