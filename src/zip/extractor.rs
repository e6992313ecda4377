use flate2::read::DeflateDecoder;
use log::debug;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// ZIP file extractor
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive, in directory order
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Decompress an entry into memory, verifying its size and CRC-32
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        if entry.is_encrypted() {
            bail!("{}: encrypted entries are not supported", entry.file_name);
        }

        let data_offset = self.parser.get_data_offset(entry).await?;
        if data_offset.saturating_add(entry.compressed_size) > self.parser.reader().size() {
            bail!("{}: entry data runs past the end of the archive", entry.file_name);
        }

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser.reader().read_at(data_offset, &mut raw).await?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                // One byte past the declared size is enough to detect a
                // mismatch without inflating an arbitrarily large stream.
                let mut out = Vec::new();
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut out)
                    .with_context(|| format!("{}: corrupt deflate stream", entry.file_name))?;
                out
            }
            CompressionMethod::Unknown(_) => {
                bail!(
                    "{}: unsupported compression method {} (only STORED and DEFLATE are supported)",
                    entry.file_name,
                    entry.compression_method.as_u16()
                );
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            bail!(
                "{}: size mismatch (expected {} bytes, got {})",
                entry.file_name,
                entry.uncompressed_size,
                data.len()
            );
        }
        let crc = crc32fast::hash(&data);
        if crc != entry.crc32 {
            bail!(
                "{}: bad CRC-32 (expected {:08x}, got {:08x})",
                entry.file_name,
                entry.crc32,
                crc
            );
        }

        Ok(data)
    }

    /// Extract an entry to `output_path`, creating parent directories and
    /// truncating any existing file.
    pub async fn extract_to_file(&self, entry: &ZipFileEntry, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("cannot create directory {}", parent.display()))?;
            }
        }

        let data = self.extract_to_memory(entry).await?;

        let mut file = fs::File::create(output_path)
            .await
            .with_context(|| format!("cannot create {}", output_path.display()))?;
        file.write_all(&data).await?;
        // Pending writes must land before anyone re-reads the file.
        file.flush().await?;

        debug!(
            "wrote {} ({} bytes) to {}",
            entry.file_name,
            data.len(),
            output_path.display()
        );
        Ok(())
    }
}
