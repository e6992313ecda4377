//! ZIP container reading.
//!
//! - [`structures`]: the on-disk records (EOCD, ZIP64 records, entry metadata)
//! - [`parser`]: locating and decoding those records from a [`ReadAt`](crate::io::ReadAt) source
//! - [`extractor`]: decompressing entries to memory or disk
//!
//! STORED and DEFLATE entries are supported, including ZIP64 archives.
//! Encrypted entries and multi-disk archives are rejected.

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
